use nutype::nutype;

pub const MAX_CORPUS_ID_LENGTH: usize = 32;

/// Short identifier of a corpus (`gita`, `const`, ...).
///
/// Lookups are case-insensitive because the identifier is lowercased on
/// construction.
#[nutype(
    sanitize(trim, lowercase),
    validate(
        not_empty,
        len_char_max = MAX_CORPUS_ID_LENGTH,
        predicate = |s| s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    ),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct CorpusId(String);

#[cfg(test)]
mod tests;

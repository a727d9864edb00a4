use nutype::nutype;

/// Longest free-text query the request layer accepts, in characters.
pub const MAX_SEARCH_TEXT_LENGTH: usize = 100;

/// A caller-supplied fuzzy search query that passed the request-level
/// boundary checks. The search engine itself accepts any `&str`.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = MAX_SEARCH_TEXT_LENGTH),
    derive(Debug, Clone, PartialEq, Eq, AsRef, Deref, TryFrom, Display)
)]
pub struct SearchText(String);

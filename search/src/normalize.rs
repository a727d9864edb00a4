//! Text normalization shared by queries and verse texts.

/// Lowercases `text`, then replaces every run of non-alphanumeric
/// characters with one space. Leading and trailing runs are kept as a
/// single space so substring checks see word boundaries.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_gap = false;

    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            out.push(c);
            in_gap = false;
        } else if !in_gap {
            out.push(' ');
            in_gap = true;
        }
    }

    out
}

/// Whitespace tokens of `text`, sorted, joined by single spaces.
pub fn sort_tokens(text: &str) -> String {
    let mut tokens: Vec<&str> = text.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// A text in both forms the scorer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedText {
    /// Output of [`normalize`]; used for the exact-substring check.
    pub normalized: String,
    /// Sorted tokens of the normalized text, as characters.
    pub sorted: Vec<char>,
}

impl PreparedText {
    pub fn new(text: &str) -> Self {
        let normalized = normalize(text);
        let sorted = sort_tokens(&normalized).chars().collect();
        Self { normalized, sorted }
    }
}

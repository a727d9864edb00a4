use serde::{Deserialize, Serialize};

/// Score added when the normalized query occurs verbatim in the
/// normalized verse text.
pub const EXACT_MATCH_BONUS: u8 = 25;

/// Highest score a candidate can receive.
pub const MAX_SCORE: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Candidates scoring below this are dropped.
    pub threshold: u8,
    /// Maximum number of results returned.
    pub limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            threshold: 10,
            limit: 15,
        }
    }
}

impl SearchConfig {
    /// Overrides the defaults with whichever values the caller supplied.
    pub fn with_overrides(threshold: Option<u8>, limit: Option<usize>) -> Self {
        let defaults = Self::default();
        Self {
            threshold: threshold.unwrap_or(defaults.threshold),
            limit: limit.unwrap_or(defaults.limit),
        }
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.threshold > MAX_SCORE {
            errors.push(format!("threshold must be at most {MAX_SCORE}"));
        }

        if self.limit == 0 {
            errors.push("limit must be at least 1".to_string());
        }

        errors
    }
}

use super::CorpusConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Registry of corpora to serve, persisted as library.toml.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryConfig {
    pub corpora: Vec<CorpusConfig>,
}

impl LibraryConfig {
    /// Loads config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, LibraryConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, LibraryConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let mut seen = HashSet::new();

        for corpus in &self.corpora {
            if corpus.name.trim().is_empty() {
                errors.push(format!("corpus {}: name must not be empty", corpus.shorthand));
            }

            if corpus.max_chapter == 0 {
                errors.push(format!(
                    "corpus {}: max_chapter must be at least 1",
                    corpus.shorthand
                ));
            }

            if corpus.text_path.as_os_str().is_empty() {
                errors.push(format!(
                    "corpus {}: text_path must not be empty",
                    corpus.shorthand
                ));
            }

            if !seen.insert(corpus.shorthand.clone()) {
                errors.push(format!("duplicate corpus shorthand: {}", corpus.shorthand));
            }
        }

        errors
    }
}

/// Errors that can occur when loading config.
#[derive(Debug, Error)]
pub enum LibraryConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

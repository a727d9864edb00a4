use crate::types::{AuthorId, CorpusId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Per-corpus settings, one `[[corpora]]` table in `library.toml`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// Display name, e.g. "Bhagavad Gita".
    pub name: String,
    pub shorthand: CorpusId,
    /// JSON array of verse records. Relative paths resolve against the
    /// directory holding `library.toml`.
    pub text_path: PathBuf,
    /// Optional JSON array of `{id, name}` author entries. When absent the
    /// author table is derived from the records.
    #[serde(default)]
    pub authors_path: Option<PathBuf>,
    /// Highest chapter number a citation may name.
    #[serde(default = "default_max_chapter")]
    pub max_chapter: u32,
    /// Author used when a caller does not pick one.
    #[serde(default = "default_author")]
    pub default_author: AuthorId,
    #[serde(default)]
    pub range_citations: RangeCitations,
}

impl CorpusConfig {
    /// Builds a config for an in-memory corpus with default settings.
    pub fn new(name: impl Into<String>, shorthand: CorpusId) -> Self {
        Self {
            name: name.into(),
            shorthand,
            text_path: PathBuf::new(),
            authors_path: None,
            max_chapter: default_max_chapter(),
            default_author: default_author(),
            range_citations: RangeCitations::default(),
        }
    }

    pub fn text_path(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.text_path)
    }

    pub fn authors_path(&self, base_dir: &Path) -> Option<PathBuf> {
        self.authors_path.as_ref().map(|path| base_dir.join(path))
    }
}

/// Which pin citations a resolved verse range reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeCitations {
    /// Every verse number from start to end, whether or not the author has
    /// text for it.
    #[default]
    Enumerate,
    /// Only verse numbers that produced text.
    Resolved,
}

impl fmt::Display for RangeCitations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeCitations::Enumerate => write!(f, "enumerate"),
            RangeCitations::Resolved => write!(f, "resolved"),
        }
    }
}

fn default_max_chapter() -> u32 {
    18
}

fn default_author() -> AuthorId {
    AuthorId(16)
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a translator or commentary source within a corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(pub u32);

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for AuthorId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// One entry of a corpus's author table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
}

/// One row of a corpus: a single verse as rendered by a single author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRecord {
    pub chapter_number: u32,
    pub verse_number: u32,
    pub author_id: AuthorId,
    #[serde(alias = "authorName")]
    pub author_name: String,
    pub description: String,
    /// Display citation, `"<chapter>.<verse>"` unless the source data says
    /// otherwise. Filled in at load time when missing.
    #[serde(default)]
    pub full_ref: String,
}

impl VerseRecord {
    /// Pin citation derived from the chapter and verse numbers.
    pub fn pin_citation(&self) -> String {
        pin_citation(self.chapter_number, self.verse_number)
    }
}

pub(crate) fn pin_citation(chapter: u32, verse: u32) -> String {
    format!("{chapter}.{verse}")
}

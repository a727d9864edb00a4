use crate::types::AuthorId;
use std::path::PathBuf;
use thiserror::Error;

/// A citation string that the grammar rejects.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CitationError {
    #[error("Invalid reference format")]
    InvalidFormat,

    #[error("Invalid verse range: start verse should be less than end verse")]
    InvalidRange { start: u32, end: u32 },
}

impl CitationError {
    pub fn kind(&self) -> &'static str {
        match self {
            CitationError::InvalidFormat => "invalid_format",
            CitationError::InvalidRange { .. } => "invalid_range",
        }
    }
}

/// Failure to turn a citation into verse text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error(transparent)]
    Citation(#[from] CitationError),

    #[error("No verses found for reference {reference}")]
    NoVersesFound { reference: String },

    #[error("No records found for the given reference and author")]
    NoRecordsForAuthor {
        reference: String,
        author_id: AuthorId,
    },
}

impl ResolveError {
    pub fn kind(&self) -> &'static str {
        match self {
            ResolveError::Citation(e) => e.kind(),
            ResolveError::NoVersesFound { .. } => "no_verses_found",
            ResolveError::NoRecordsForAuthor { .. } => "no_records_for_author",
        }
    }
}

/// Problems found while loading or validating corpus data.
#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate record for {chapter}.{verse} by author {author_id}")]
    DuplicateRecord {
        chapter: u32,
        verse: u32,
        author_id: AuthorId,
    },

    #[error("record {chapter}.{verse} is outside chapters 1..={max_chapter}")]
    ChapterOutOfBounds {
        chapter: u32,
        verse: u32,
        max_chapter: u32,
    },

    #[error("record in chapter {chapter} by author {author_id} has verse number 0")]
    InvalidVerseNumber { chapter: u32, author_id: AuthorId },

    #[error("author {author_id} is named both {first:?} and {second:?}")]
    AuthorNameMismatch {
        author_id: AuthorId,
        first: String,
        second: String,
    },
}

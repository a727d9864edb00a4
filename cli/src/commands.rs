//! Command handlers. Each returns the `content` value printed on success.

use gita_core::types::{AuthorId, SearchText, SearchTextError};
use gita_core::{Library, LibraryError};
use gita_search::{SearchConfig, SearchEngine, SearchError};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Library(#[from] LibraryError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("Invalid query: {0}")]
    Query(#[from] SearchTextError),

    #[error("Invalid Author ID")]
    InvalidAuthor(AuthorId),

    #[error("invalid search options: {}", .0.join("; "))]
    InvalidOptions(Vec<String>),

    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub fn kind(&self) -> &'static str {
        match self {
            CliError::Library(e) => e.kind(),
            CliError::Search(e) => e.kind(),
            CliError::Query(_) => "invalid_query",
            CliError::InvalidAuthor(_) => "invalid_author",
            CliError::InvalidOptions(_) => "invalid_options",
            CliError::Json(_) => "json",
        }
    }
}

#[derive(Serialize)]
struct CorpusEntry<'a> {
    name: &'a str,
    shorthand: &'a str,
}

#[derive(Serialize)]
struct ValidatedCitation {
    reference: String,
    kind: String,
    chapter: u32,
    verses: String,
}

pub fn corpora(library: &Library) -> Result<Value, CliError> {
    let entries: Vec<_> = library
        .corpora()
        .map(|corpus| CorpusEntry {
            name: corpus.name(),
            shorthand: corpus.id().as_str(),
        })
        .collect();
    Ok(serde_json::to_value(entries)?)
}

pub fn authors(library: &Library, corpus: &str) -> Result<Value, CliError> {
    Ok(serde_json::to_value(library.authors(corpus)?)?)
}

pub fn validate(library: &Library, corpus: &str, reference: &str) -> Result<Value, CliError> {
    let citation = library.validate_citation(corpus, reference)?;
    Ok(serde_json::to_value(ValidatedCitation {
        reference: citation.to_string(),
        kind: citation.kind().to_string(),
        chapter: citation.chapter(),
        verses: citation.verses_label(),
    })?)
}

pub fn reference(
    library: &Library,
    corpus: &str,
    reference: &str,
    author_id: Option<AuthorId>,
) -> Result<Value, CliError> {
    let resolved = library.resolve_citation(corpus, reference, author_id)?;
    Ok(serde_json::to_value(resolved)?)
}

/// Rejects blank or over-long queries and authors missing from the
/// corpus's author table before searching.
pub fn fuzzy(
    library: &Library,
    corpus: &str,
    query: &str,
    author_id: Option<AuthorId>,
    threshold: Option<u8>,
    limit: Option<usize>,
) -> Result<Value, CliError> {
    let corpus = library.corpus(corpus)?;
    let query = SearchText::try_new(query.to_string())?;
    let author_id = author_id.unwrap_or_else(|| corpus.default_author());
    if !corpus.has_author(author_id) {
        return Err(CliError::InvalidAuthor(author_id));
    }

    let config = SearchConfig::with_overrides(threshold, limit);
    let errors = config.validate();
    if !errors.is_empty() {
        return Err(CliError::InvalidOptions(errors));
    }

    let results = SearchEngine::new(config).search(&corpus, query.as_str(), author_id)?;
    Ok(serde_json::to_value(results)?)
}

//! Registry of loaded corpora.

use crate::citation::Citation;
use crate::corpus::Corpus;
use crate::error::{CitationError, CorpusError, ResolveError};
use crate::resolve::{ResolvedReference, resolve_citation};
use crate::types::{Author, AuthorId, CorpusId, LibraryConfig, LibraryConfigError};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

pub mod error {
    use super::*;

    #[derive(Debug, Error)]
    pub enum LibraryError {
        #[error("config error: {0}")]
        Config(#[from] LibraryConfigError),

        #[error("invalid config: {}", .0.join("; "))]
        InvalidConfig(Vec<String>),

        #[error("Invalid Corpus Name: {0}")]
        UnknownCorpus(String),

        #[error(transparent)]
        Citation(#[from] CitationError),

        #[error(transparent)]
        Resolve(#[from] ResolveError),
    }

    impl LibraryError {
        pub fn kind(&self) -> &'static str {
            match self {
                LibraryError::Config(_) | LibraryError::InvalidConfig(_) => "config",
                LibraryError::UnknownCorpus(_) => "unknown_corpus",
                LibraryError::Citation(e) => e.kind(),
                LibraryError::Resolve(e) => e.kind(),
            }
        }
    }
}

use error::LibraryError;

/// A corpus that was configured but could not be loaded.
#[derive(Debug)]
pub struct LoadFailure {
    pub shorthand: CorpusId,
    pub error: CorpusError,
}

/// Every corpus the process serves, immutable once built.
#[derive(Default)]
pub struct Library {
    corpora: BTreeMap<CorpusId, Arc<Corpus>>,
    load_failures: Vec<LoadFailure>,
}

/// Create operations.
impl Library {
    /// Reads `library.toml` at `config_path` and loads every corpus it names.
    pub fn open(config_path: &Path) -> Result<Self, LibraryError> {
        let config = LibraryConfig::load(config_path)?;
        let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
        Self::from_config(&config, base_dir)
    }

    /// Loads every corpus in `config`. A corpus whose data fails to load is
    /// skipped and recorded in [`Library::load_failures`]; the rest still
    /// serve.
    pub fn from_config(config: &LibraryConfig, base_dir: &Path) -> Result<Self, LibraryError> {
        let errors = config.validate();
        if !errors.is_empty() {
            return Err(LibraryError::InvalidConfig(errors));
        }

        let mut library = Self::default();
        for corpus_config in &config.corpora {
            match Corpus::load(corpus_config.clone(), base_dir) {
                Ok(corpus) => library.insert(corpus),
                Err(error) => {
                    tracing::warn!(
                        corpus = %corpus_config.shorthand,
                        %error,
                        "skipping corpus that failed to load"
                    );
                    library.load_failures.push(LoadFailure {
                        shorthand: corpus_config.shorthand.clone(),
                        error,
                    });
                }
            }
        }

        Ok(library)
    }

    /// Builds a library from corpora that are already in memory.
    pub fn from_corpora(corpora: impl IntoIterator<Item = Corpus>) -> Self {
        let mut library = Self::default();
        for corpus in corpora {
            library.insert(corpus);
        }
        library
    }

    fn insert(&mut self, corpus: Corpus) {
        self.corpora.insert(corpus.id().clone(), Arc::new(corpus));
    }
}

/// Read operations.
impl Library {
    /// Looks up a corpus by shorthand, ignoring case and surrounding space.
    pub fn corpus(&self, shorthand: &str) -> Result<Arc<Corpus>, LibraryError> {
        CorpusId::try_from(shorthand)
            .ok()
            .and_then(|id| self.corpora.get(&id).cloned())
            .ok_or_else(|| LibraryError::UnknownCorpus(shorthand.to_string()))
    }

    /// All loaded corpora in shorthand order.
    pub fn corpora(&self) -> impl Iterator<Item = &Arc<Corpus>> {
        self.corpora.values()
    }

    pub fn load_failures(&self) -> &[LoadFailure] {
        &self.load_failures
    }

    pub fn authors(&self, shorthand: &str) -> Result<Vec<Author>, LibraryError> {
        Ok(self.corpus(shorthand)?.authors().to_vec())
    }

    /// Checks `raw` against the corpus's citation grammar without touching
    /// verse data.
    pub fn validate_citation(&self, shorthand: &str, raw: &str) -> Result<Citation, LibraryError> {
        let corpus = self.corpus(shorthand)?;
        Ok(Citation::parse(raw.trim(), corpus.max_chapter())?)
    }

    /// Resolves `raw` in the named corpus. Uses the corpus's default author
    /// when `author_id` is `None`.
    pub fn resolve_citation(
        &self,
        shorthand: &str,
        raw: &str,
        author_id: Option<AuthorId>,
    ) -> Result<ResolvedReference, LibraryError> {
        let corpus = self.corpus(shorthand)?;
        let author_id = author_id.unwrap_or_else(|| corpus.default_author());
        Ok(resolve_citation(raw, author_id, &corpus)?)
    }
}

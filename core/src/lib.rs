//! Citation lookups over multi-author verse corpora.
//!
//! - [`types`]: records, identifiers and `library.toml` configuration
//! - [`corpus`]: the read-only in-memory store of one corpus
//! - [`citation`]: the `C`, `C.V` and `C.S-E` citation grammar
//! - [`resolve`]: citation to ordered verse text and pin citations
//! - [`library`]: the set of corpora a process serves

pub mod citation;
pub mod corpus;
pub mod error;
pub mod library;
pub mod resolve;
pub mod types;

pub use citation::{Citation, CitationKind};
pub use corpus::{Corpus, RowId};
pub use error::{CitationError, CorpusError, ResolveError};
pub use library::error::LibraryError;
pub use library::{Library, LoadFailure};
pub use resolve::{ResolvedReference, resolve, resolve_citation};

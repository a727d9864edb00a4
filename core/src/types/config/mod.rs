mod corpus;
mod library;

pub use corpus::{CorpusConfig, RangeCitations};
pub use library::{LibraryConfig, LibraryConfigError};

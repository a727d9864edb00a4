pub mod config;
pub use config::{CorpusConfig, LibraryConfig, LibraryConfigError, RangeCitations};

pub(crate) mod corpus_id;
pub use corpus_id::{CorpusId, CorpusIdError, MAX_CORPUS_ID_LENGTH};

pub(crate) mod record;
pub use record::{Author, AuthorId, VerseRecord};

pub(crate) mod search_text;
pub use search_text::{MAX_SEARCH_TEXT_LENGTH, SearchText, SearchTextError};

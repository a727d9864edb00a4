//! Fuzzy verse search.
//!
//! Ranks one author's verses in one corpus against a free-text query.
//!
//! # Scoring
//!
//! - Query and verse text are lowercased and every run of non-alphanumeric
//!   characters becomes a single space. Non-ASCII letters are kept, so
//!   verses with diacritics (`Kṛṣṇa`) score against their own letters
//!   rather than an ASCII-stripped form; scores on such text differ from
//!   scorers that drop non-ASCII input first.
//! - The baseline is the token-sort ratio: whitespace tokens are sorted and
//!   rejoined, then compared with an insertion/deletion edit-distance ratio
//!   in `0..=100`.
//! - A verse containing the normalized query verbatim gets +25, capped
//!   at 100.
//!
//! # Ranking
//!
//! - Candidates below the threshold (default 10) are dropped; none left is
//!   [`SearchError::NoMatches`].
//! - Survivors are sorted by score, descending, ties in row order, and cut
//!   to the limit (default 15).
//!
//! The shared corpus is never written to. Scores live in a request-local
//! vector keyed by row id.

mod config;
mod engine;
mod index;
mod normalize;
mod ratio;
mod results;

pub use config::{EXACT_MATCH_BONUS, MAX_SCORE, SearchConfig};
pub use engine::{SearchEngine, SearchError, fuzzy_search, match_score};
pub use index::SearchIndex;
pub use normalize::{PreparedText, normalize, sort_tokens};
pub use ratio::{indel_distance, ratio, token_sort_ratio};
pub use results::{SearchHit, SearchResults};

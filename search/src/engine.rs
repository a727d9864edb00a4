//! Scoring and ranking of one author's verses against a query.

use crate::config::{EXACT_MATCH_BONUS, MAX_SCORE, SearchConfig};
use crate::index::SearchIndex;
use crate::normalize::PreparedText;
use crate::ratio::ratio;
use crate::results::SearchResults;
use gita_core::types::AuthorId;
use gita_core::{Corpus, RowId};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("No records found that match your query")]
    NoMatches,
}

impl SearchError {
    pub fn kind(&self) -> &'static str {
        match self {
            SearchError::NoMatches => "no_matches",
        }
    }
}

/// Score of `candidate` for `query`: token-sort ratio, plus
/// [`EXACT_MATCH_BONUS`] when the normalized query occurs verbatim in the
/// normalized candidate, capped at [`MAX_SCORE`].
pub fn match_score(query: &PreparedText, candidate: &PreparedText) -> u8 {
    let base = ratio(&query.sorted, &candidate.sorted);
    let bonus = if candidate.normalized.contains(query.normalized.as_str()) {
        EXACT_MATCH_BONUS
    } else {
        0
    };
    base.saturating_add(bonus).min(MAX_SCORE)
}

/// Fuzzy search over a single author's rows.
///
/// The engine holds no per-request state. Scores are collected in a
/// request-local vector keyed by [`RowId`]; the corpus is only read.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    config: SearchConfig,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Normalizes each candidate while scoring.
    pub fn search(
        &self,
        corpus: &Corpus,
        query: &str,
        author_id: AuthorId,
    ) -> Result<SearchResults, SearchError> {
        let query = PreparedText::new(query);
        let scores = corpus.author_rows(author_id).map(|(row, record)| {
            let candidate = PreparedText::new(&record.description);
            (row, match_score(&query, &candidate))
        });
        self.rank(corpus, author_id, scores)
    }

    /// Same as [`SearchEngine::search`], reusing the index's normalized
    /// texts.
    pub fn search_index(
        &self,
        index: &SearchIndex,
        query: &str,
        author_id: AuthorId,
    ) -> Result<SearchResults, SearchError> {
        let corpus = index.corpus();
        let query = PreparedText::new(query);
        let scores = corpus
            .author_rows(author_id)
            .map(|(row, _)| (row, match_score(&query, index.prepared(row))));
        self.rank(corpus, author_id, scores)
    }

    fn rank(
        &self,
        corpus: &Corpus,
        author_id: AuthorId,
        scores: impl Iterator<Item = (RowId, u8)>,
    ) -> Result<SearchResults, SearchError> {
        let mut candidates = 0usize;
        let mut hits: Vec<(RowId, u8)> = scores
            .inspect(|_| candidates += 1)
            .filter(|&(_, score)| score >= self.config.threshold)
            .collect();

        let matched = hits.len();
        tracing::debug!(
            corpus = %corpus.id(),
            author = %author_id,
            candidates,
            matched,
            threshold = self.config.threshold,
            "scored fuzzy search candidates"
        );

        if hits.is_empty() {
            return Err(SearchError::NoMatches);
        }

        // Stable: equal scores keep row order.
        hits.sort_by(|a, b| b.1.cmp(&a.1));
        let author = corpus.record(hits[0].0).author_name.clone();
        hits.truncate(self.config.limit);

        let records = hits.iter().map(|&(row, _)| corpus.record(row));
        Ok(SearchResults {
            author,
            text: records.clone().map(|r| r.description.clone()).collect(),
            pin_citations: records.map(|r| r.full_ref.clone()).collect(),
            match_scores: hits.iter().map(|&(_, score)| score).collect(),
        })
    }
}

/// Ranks `author_id`'s verses in `corpus` against `query`. `threshold` and
/// `limit` default to 10 and 15.
pub fn fuzzy_search(
    query: &str,
    corpus: &Corpus,
    author_id: AuthorId,
    threshold: Option<u8>,
    limit: Option<usize>,
) -> Result<SearchResults, SearchError> {
    let engine = SearchEngine::new(SearchConfig::with_overrides(threshold, limit));
    engine.search(corpus, query, author_id)
}

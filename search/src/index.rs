//! Pre-normalized verse texts of one corpus.

use crate::normalize::PreparedText;
use gita_core::{Corpus, RowId};
use std::sync::Arc;

/// Normalized and token-sorted form of every verse in a corpus, aligned
/// with the corpus's row ids.
///
/// Built once and then only read, so one index can serve concurrent
/// searches. Ranking through an index gives exactly the same results as
/// [`SearchEngine::search`](crate::SearchEngine::search) on the corpus.
pub struct SearchIndex {
    corpus: Arc<Corpus>,
    prepared: Vec<PreparedText>,
}

impl SearchIndex {
    pub fn new(corpus: Arc<Corpus>) -> Self {
        let prepared = corpus
            .records()
            .iter()
            .map(|record| PreparedText::new(&record.description))
            .collect();

        Self { corpus, prepared }
    }

    pub fn corpus(&self) -> &Arc<Corpus> {
        &self.corpus
    }

    pub(crate) fn prepared(&self, row: RowId) -> &PreparedText {
        &self.prepared[row.index()]
    }
}

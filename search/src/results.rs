//! Search results types.

use serde::Serialize;

/// Ranked matches for one query, as parallel arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub author: String,
    pub text: Vec<String>,
    #[serde(rename = "ref_list")]
    pub pin_citations: Vec<String>,
    pub match_scores: Vec<u8>,
}

/// One ranked match, borrowed from [`SearchResults`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit<'a> {
    pub text: &'a str,
    pub pin_citation: &'a str,
    pub score: u8,
}

impl SearchResults {
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Iterates over matches in rank order.
    pub fn iter(&self) -> impl Iterator<Item = SearchHit<'_>> + '_ {
        self.text
            .iter()
            .zip(&self.pin_citations)
            .zip(&self.match_scores)
            .map(|((text, pin_citation), &score)| SearchHit {
                text,
                pin_citation,
                score,
            })
    }
}

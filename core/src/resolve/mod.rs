//! Citation → verse text.

use crate::citation::Citation;
use crate::corpus::Corpus;
use crate::error::ResolveError;
use crate::types::record::pin_citation;
use crate::types::{AuthorId, RangeCitations, VerseRecord};
use serde::Serialize;

/// Verse text for one citation, in the shape callers serialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedReference {
    pub author: String,
    pub text: Vec<String>,
    /// Serialized as a string.
    #[serde(serialize_with = "serialize_chapter")]
    pub chapter: u32,
    /// `All` for a chapter, `V` for a verse, `S-E` for a range.
    pub verses: String,
    #[serde(rename = "reference")]
    pub full_reference: String,
    #[serde(rename = "ref_list")]
    pub pin_citations: Vec<String>,
}

fn serialize_chapter<S>(chapter: &u32, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(chapter)
}

/// Parses `raw` (after trimming) with the corpus's chapter bound and
/// resolves it for `author_id`.
pub fn resolve_citation(
    raw: &str,
    author_id: AuthorId,
    corpus: &Corpus,
) -> Result<ResolvedReference, ResolveError> {
    let citation = Citation::parse(raw.trim(), corpus.max_chapter())?;
    resolve(&citation, author_id, corpus)
}

pub fn resolve(
    citation: &Citation,
    author_id: AuthorId,
    corpus: &Corpus,
) -> Result<ResolvedReference, ResolveError> {
    let chapter = citation.chapter();

    // Only a chapter lookup can select no verse numbers at all.
    if matches!(citation, Citation::Chapter(_))
        && corpus.verse_numbers(chapter).is_none_or(|verses| verses.is_empty())
    {
        return Err(ResolveError::NoVersesFound {
            reference: citation.to_string(),
        });
    }

    let rows: Vec<&VerseRecord> = corpus
        .author_rows(author_id)
        .map(|(_, record)| record)
        .filter(|record| citation.covers(record.chapter_number, record.verse_number))
        .collect();

    let Some(first) = rows.first() else {
        return Err(ResolveError::NoRecordsForAuthor {
            reference: citation.to_string(),
            author_id,
        });
    };

    let pin_citations = match *citation {
        Citation::Verse { .. } => vec![first.pin_citation()],
        Citation::Range { start, end, .. }
            if corpus.range_citations() == RangeCitations::Enumerate =>
        {
            (start..=end).map(|verse| pin_citation(chapter, verse)).collect()
        }
        Citation::Chapter(_) | Citation::Range { .. } => distinct_verses(&rows)
            .map(VerseRecord::pin_citation)
            .collect(),
    };

    tracing::debug!(
        corpus = %corpus.id(),
        citation = %citation,
        author = %author_id,
        rows = rows.len(),
        "resolved citation"
    );

    Ok(ResolvedReference {
        author: first.author_name.clone(),
        text: rows.iter().map(|record| record.description.clone()).collect(),
        chapter,
        verses: citation.verses_label(),
        full_reference: citation.to_string(),
        pin_citations,
    })
}

/// First row of each verse in `rows`, in appearance order.
fn distinct_verses<'a>(rows: &[&'a VerseRecord]) -> impl Iterator<Item = &'a VerseRecord> {
    let mut seen = std::collections::HashSet::new();
    rows.iter()
        .copied()
        .filter(move |record| seen.insert(record.verse_number))
}

#[cfg(test)]
mod tests;

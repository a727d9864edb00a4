use super::*;
use crate::error::CitationError;
use crate::types::{CorpusConfig, CorpusId};

mod common {
    use super::*;

    pub(super) const SIVANANDA: AuthorId = AuthorId(16);
    pub(super) const GAMBIRANANDA: AuthorId = AuthorId(19);

    pub(super) fn record(chapter: u32, verse: u32, author: AuthorId) -> VerseRecord {
        VerseRecord {
            chapter_number: chapter,
            verse_number: verse,
            author_id: author,
            author_name: format!("Author {author}"),
            description: format!("text {chapter}.{verse} by {author}"),
            full_ref: String::new(),
        }
    }

    /// Chapter 1: verses 1..=47 by author 16, 1..=3 by author 19.
    /// Chapter 2: verses 1..=5 by author 16 only.
    /// Chapter 6: verses 4 and 6 by author 16, 4..=8 by author 19.
    pub(super) fn gita() -> Corpus {
        gita_with(RangeCitations::Enumerate)
    }

    pub(super) fn gita_with(range_citations: RangeCitations) -> Corpus {
        let mut records = Vec::new();
        records.extend((1..=47).map(|v| record(1, v, SIVANANDA)));
        records.extend((1..=3).map(|v| record(1, v, GAMBIRANANDA)));
        records.extend((1..=5).map(|v| record(2, v, SIVANANDA)));
        records.extend([4, 6].map(|v| record(6, v, SIVANANDA)));
        records.extend((4..=8).map(|v| record(6, v, GAMBIRANANDA)));

        let mut config = CorpusConfig::new("Bhagavad Gita", CorpusId::try_from("gita").unwrap());
        config.range_citations = range_citations;
        Corpus::new(config, records, vec![]).unwrap()
    }

    pub(super) fn refs(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }
}

mod chapter {
    use super::common::*;
    use super::*;

    #[test]
    fn test_whole_chapter() {
        let corpus = gita();

        let resolved = resolve_citation("1", SIVANANDA, &corpus).unwrap();

        assert_eq!(resolved.verses, "All");
        assert_eq!(resolved.chapter, 1);
        assert_eq!(resolved.full_reference, "1");
        assert_eq!(resolved.author, "Author 16");
        assert_eq!(resolved.pin_citations.len(), 47);
        assert_eq!(resolved.text.len(), 47);
        assert_eq!(resolved.pin_citations[0], "1.1");
        assert_eq!(resolved.pin_citations[46], "1.47");
        assert_eq!(resolved.text[0], "text 1.1 by 16");
    }

    #[test]
    fn test_pin_citations_match_author_verse_count() {
        let corpus = gita();

        let resolved = resolve_citation("1", GAMBIRANANDA, &corpus).unwrap();

        assert_eq!(resolved.pin_citations, refs(&["1.1", "1.2", "1.3"]));
        assert_eq!(resolved.author, "Author 19");
    }

    #[test]
    fn test_chapter_without_any_verses() {
        let corpus = gita();

        let err = resolve_citation("3", SIVANANDA, &corpus).unwrap_err();

        assert_eq!(
            err,
            ResolveError::NoVersesFound {
                reference: "3".to_string()
            }
        );
        assert_eq!(err.kind(), "no_verses_found");
    }

    #[test]
    fn test_chapter_no_translation_for_author() {
        let corpus = gita();

        let err = resolve_citation("2", GAMBIRANANDA, &corpus).unwrap_err();

        assert_eq!(
            err,
            ResolveError::NoRecordsForAuthor {
                reference: "2".to_string(),
                author_id: GAMBIRANANDA
            }
        );
        assert_eq!(err.kind(), "no_records_for_author");
    }

    #[test]
    fn test_unknown_author_is_no_records() {
        let corpus = gita();

        let err = resolve_citation("1", AuthorId(999), &corpus).unwrap_err();

        assert!(matches!(err, ResolveError::NoRecordsForAuthor { .. }));
    }
}

mod verse {
    use super::common::*;
    use super::*;

    #[test]
    fn test_single_verse() {
        let corpus = gita();

        let resolved = resolve_citation("2.3", SIVANANDA, &corpus).unwrap();

        assert_eq!(resolved.verses, "3");
        assert_eq!(resolved.full_reference, "2.3");
        assert_eq!(resolved.text, vec!["text 2.3 by 16".to_string()]);
        assert_eq!(resolved.pin_citations, refs(&["2.3"]));
    }

    #[test]
    fn test_verse_past_chapter_end() {
        let corpus = gita();

        let err = resolve_citation("2.99", SIVANANDA, &corpus).unwrap_err();

        assert_eq!(
            err,
            ResolveError::NoRecordsForAuthor {
                reference: "2.99".to_string(),
                author_id: SIVANANDA
            }
        );
        assert_eq!(err.kind(), "no_records_for_author");
    }

    #[test]
    fn test_verse_in_chapter_without_rows() {
        let corpus = gita();

        let err = resolve_citation("3.1", SIVANANDA, &corpus).unwrap_err();

        assert_eq!(err.kind(), "no_records_for_author");
    }

    #[test]
    fn test_verse_only_other_author_has() {
        let corpus = gita();

        let err = resolve_citation("6.5", SIVANANDA, &corpus).unwrap_err();

        assert!(matches!(err, ResolveError::NoRecordsForAuthor { .. }));
    }

    #[test]
    fn test_input_is_trimmed() {
        let corpus = gita();

        let resolved = resolve_citation("  2.3\n", SIVANANDA, &corpus).unwrap();

        assert_eq!(resolved.full_reference, "2.3");
    }
}

mod range {
    use super::common::*;
    use super::*;

    #[test]
    fn test_range_enumerates_gap_verses() {
        let corpus = gita();

        let resolved = resolve_citation("6.4-7", SIVANANDA, &corpus).unwrap();

        assert_eq!(resolved.verses, "4-7");
        assert_eq!(resolved.full_reference, "6.4-7");
        assert_eq!(resolved.pin_citations, refs(&["6.4", "6.5", "6.6", "6.7"]));
        assert_eq!(
            resolved.text,
            vec!["text 6.4 by 16".to_string(), "text 6.6 by 16".to_string()]
        );
    }

    #[test]
    fn test_range_resolved_policy_lists_only_found_verses() {
        let corpus = gita_with(RangeCitations::Resolved);

        let resolved = resolve_citation("6.4-7", SIVANANDA, &corpus).unwrap();

        assert_eq!(resolved.pin_citations, refs(&["6.4", "6.6"]));
        assert_eq!(resolved.text.len(), 2);
    }

    #[test]
    fn test_range_past_chapter_end() {
        let corpus = gita();

        let resolved = resolve_citation("2.4-9", SIVANANDA, &corpus).unwrap();

        assert_eq!(resolved.text.len(), 2);
        assert_eq!(resolved.pin_citations.len(), 6);
    }

    #[test]
    fn test_range_past_chapter_end_without_rows() {
        let corpus = gita();

        let err = resolve_citation("2.80-90", SIVANANDA, &corpus).unwrap_err();

        assert_eq!(
            err,
            ResolveError::NoRecordsForAuthor {
                reference: "2.80-90".to_string(),
                author_id: SIVANANDA
            }
        );
        assert_eq!(
            err.to_string(),
            "No records found for the given reference and author"
        );
    }

    #[test]
    fn test_invalid_range_surfaces_citation_error() {
        let corpus = gita();

        let err = resolve_citation("3.5-5", SIVANANDA, &corpus).unwrap_err();

        assert_eq!(
            err,
            ResolveError::Citation(CitationError::InvalidRange { start: 5, end: 5 })
        );
        assert_eq!(err.kind(), "invalid_range");
    }

    #[test]
    fn test_chapter_above_corpus_bound() {
        let corpus = gita();

        let err = resolve_citation("19.1-2", SIVANANDA, &corpus).unwrap_err();

        assert_eq!(err, ResolveError::Citation(CitationError::InvalidFormat));
    }
}

mod serialize {
    use super::common::*;
    use super::*;

    #[test]
    fn test_field_names() {
        let corpus = gita();
        let resolved = resolve_citation("6.4-5", SIVANANDA, &corpus).unwrap();

        let json = serde_json::to_value(&resolved).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "author": "Author 16",
                "text": ["text 6.4 by 16"],
                "chapter": "6",
                "verses": "4-5",
                "reference": "6.4-5",
                "ref_list": ["6.4", "6.5"],
            })
        );
    }
}

//! Citation grammar.
//!
//! Three shapes are accepted, tried in this order:
//!
//! - `C`: a whole chapter
//! - `C.V`: a single verse
//! - `C.S-E`: a verse range, `S < E`
//!
//! Numbers are plain ASCII decimals without a leading zero. Chapters must
//! lie in `1..=max_chapter`, which each corpus configures. Verse numbers
//! have no upper bound beyond `u32`.

use crate::error::CitationError;
use std::fmt;

/// A parsed, validated citation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Citation {
    Chapter(u32),
    Verse { chapter: u32, verse: u32 },
    Range { chapter: u32, start: u32, end: u32 },
}

/// Which of the three citation shapes a string matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CitationKind {
    Chapter,
    Verse,
    Range,
}

impl fmt::Display for CitationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CitationKind::Chapter => write!(f, "chapter"),
            CitationKind::Verse => write!(f, "verse"),
            CitationKind::Range => write!(f, "range"),
        }
    }
}

impl Citation {
    /// Parses `input` exactly as given; callers trim beforehand.
    pub fn parse(input: &str, max_chapter: u32) -> Result<Self, CitationError> {
        if let Some(chapter) = parse_chapter(input, max_chapter) {
            return Ok(Citation::Chapter(chapter));
        }

        let (chapter, verses) = input.split_once('.').ok_or(CitationError::InvalidFormat)?;
        let chapter = parse_chapter(chapter, max_chapter).ok_or(CitationError::InvalidFormat)?;

        if let Some(verse) = parse_number(verses) {
            return Ok(Citation::Verse { chapter, verse });
        }

        let (start, end) = verses
            .split_once('-')
            .and_then(|(start, end)| Some((parse_number(start)?, parse_number(end)?)))
            .ok_or(CitationError::InvalidFormat)?;

        if start >= end {
            return Err(CitationError::InvalidRange { start, end });
        }

        Ok(Citation::Range {
            chapter,
            start,
            end,
        })
    }

    pub fn kind(&self) -> CitationKind {
        match self {
            Citation::Chapter(_) => CitationKind::Chapter,
            Citation::Verse { .. } => CitationKind::Verse,
            Citation::Range { .. } => CitationKind::Range,
        }
    }

    pub fn chapter(&self) -> u32 {
        match *self {
            Citation::Chapter(chapter)
            | Citation::Verse { chapter, .. }
            | Citation::Range { chapter, .. } => chapter,
        }
    }

    /// First verse named, `None` for a whole chapter.
    pub fn verse(&self) -> Option<u32> {
        match *self {
            Citation::Chapter(_) => None,
            Citation::Verse { verse, .. } => Some(verse),
            Citation::Range { start, .. } => Some(start),
        }
    }

    /// Last verse of a range.
    pub fn range_end(&self) -> Option<u32> {
        match *self {
            Citation::Range { end, .. } => Some(end),
            _ => None,
        }
    }

    /// Whether `verse_number` falls inside this citation's chapter.
    pub fn covers(&self, chapter: u32, verse_number: u32) -> bool {
        if chapter != self.chapter() {
            return false;
        }
        match *self {
            Citation::Chapter(_) => true,
            Citation::Verse { verse, .. } => verse_number == verse,
            Citation::Range { start, end, .. } => (start..=end).contains(&verse_number),
        }
    }

    /// The `verses` label of a resolved reference: `All`, `V` or `S-E`.
    pub fn verses_label(&self) -> String {
        match *self {
            Citation::Chapter(_) => "All".to_string(),
            Citation::Verse { verse, .. } => verse.to_string(),
            Citation::Range { start, end, .. } => format!("{start}-{end}"),
        }
    }
}

impl fmt::Display for Citation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Citation::Chapter(chapter) => write!(f, "{chapter}"),
            Citation::Verse { chapter, verse } => write!(f, "{chapter}.{verse}"),
            Citation::Range {
                chapter,
                start,
                end,
            } => write!(f, "{chapter}.{start}-{end}"),
        }
    }
}

/// A positive decimal without sign or leading zero.
fn parse_number(s: &str) -> Option<u32> {
    let bytes = s.as_bytes();
    if !matches!(bytes.first(), Some(b'1'..=b'9')) || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    s.parse().ok()
}

fn parse_chapter(s: &str, max_chapter: u32) -> Option<u32> {
    parse_number(s).filter(|chapter| *chapter <= max_chapter)
}

//! In-memory corpus store.
//!
//! Rows live in one vector in their natural (load) order and are addressed by
//! [`RowId`]. Nothing mutates a corpus after construction, so one instance is
//! shared by every request through an `Arc`. Request-scoped data such as match
//! scores is kept by callers in their own arrays keyed by `RowId`.

use crate::error::CorpusError;
use crate::types::record::pin_citation;
use crate::types::{Author, AuthorId, CorpusConfig, CorpusId, RangeCitations, VerseRecord};
use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Stable index of a row within its corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowId(usize);

impl RowId {
    pub fn index(self) -> usize {
        self.0
    }
}

pub struct Corpus {
    config: CorpusConfig,
    records: Vec<VerseRecord>,
    authors: Vec<Author>,
    /// Row ids per author, in row order.
    by_author: HashMap<AuthorId, Vec<RowId>>,
    /// Verse numbers present in each chapter across all authors.
    chapters: BTreeMap<u32, BTreeSet<u32>>,
    digest: blake3::Hash,
}

/// Create operations.
impl Corpus {
    /// Builds a corpus from already-loaded rows.
    ///
    /// `authors` may be empty, in which case the author table is derived
    /// from the rows in first-seen order.
    pub fn new(
        config: CorpusConfig,
        mut records: Vec<VerseRecord>,
        authors: Vec<Author>,
    ) -> Result<Self, CorpusError> {
        let mut by_author: HashMap<AuthorId, Vec<RowId>> = HashMap::new();
        let mut chapters: BTreeMap<u32, BTreeSet<u32>> = BTreeMap::new();
        let mut seen = BTreeSet::new();
        let mut names: HashMap<AuthorId, &str> = HashMap::new();
        let mut derived_authors = Vec::new();

        for (index, record) in records.iter_mut().enumerate() {
            let (chapter, verse) = (record.chapter_number, record.verse_number);

            if chapter == 0 || chapter > config.max_chapter {
                return Err(CorpusError::ChapterOutOfBounds {
                    chapter,
                    verse,
                    max_chapter: config.max_chapter,
                });
            }
            if verse == 0 {
                return Err(CorpusError::InvalidVerseNumber {
                    chapter,
                    author_id: record.author_id,
                });
            }
            if !seen.insert((chapter, verse, record.author_id)) {
                return Err(CorpusError::DuplicateRecord {
                    chapter,
                    verse,
                    author_id: record.author_id,
                });
            }
            if record.full_ref.is_empty() {
                record.full_ref = pin_citation(chapter, verse);
            }

            by_author
                .entry(record.author_id)
                .or_default()
                .push(RowId(index));
            chapters.entry(chapter).or_default().insert(verse);
        }

        for record in &records {
            match names.get(&record.author_id) {
                Some(first) if *first != record.author_name => {
                    return Err(CorpusError::AuthorNameMismatch {
                        author_id: record.author_id,
                        first: first.to_string(),
                        second: record.author_name.clone(),
                    });
                }
                Some(_) => {}
                None => {
                    names.insert(record.author_id, &record.author_name);
                    derived_authors.push(Author {
                        id: record.author_id,
                        name: record.author_name.clone(),
                    });
                }
            }
        }

        let authors = if authors.is_empty() {
            derived_authors
        } else {
            authors
        };
        let digest = digest_records(&records);

        tracing::info!(
            corpus = %config.shorthand,
            records = records.len(),
            authors = authors.len(),
            chapters = chapters.len(),
            digest = %digest.to_hex(),
            "corpus loaded"
        );

        Ok(Self {
            config,
            records,
            authors,
            by_author,
            chapters,
            digest,
        })
    }

    /// Loads the text (and optional authors) files named by `config`.
    /// Relative paths resolve against `base_dir`.
    pub fn load(config: CorpusConfig, base_dir: &Path) -> Result<Self, CorpusError> {
        let records: Vec<VerseRecord> = read_json(&config.text_path(base_dir))?;
        let authors: Vec<Author> = match config.authors_path(base_dir) {
            Some(path) => read_json(&path)?,
            None => Vec::new(),
        };
        Self::new(config, records, authors)
    }
}

/// Read operations.
impl Corpus {
    pub fn id(&self) -> &CorpusId {
        &self.config.shorthand
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn max_chapter(&self) -> u32 {
        self.config.max_chapter
    }

    pub fn default_author(&self) -> AuthorId {
        self.config.default_author
    }

    pub fn range_citations(&self) -> RangeCitations {
        self.config.range_citations
    }

    /// BLAKE3 digest over every row; equal digests mean equal contents.
    pub fn digest(&self) -> blake3::Hash {
        self.digest
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[VerseRecord] {
        &self.records
    }

    pub fn record(&self, row: RowId) -> &VerseRecord {
        &self.records[row.0]
    }

    /// Rows written by `author_id`, in row order. Empty for unknown authors.
    pub fn author_rows(
        &self,
        author_id: AuthorId,
    ) -> impl Iterator<Item = (RowId, &VerseRecord)> + '_ {
        self.by_author
            .get(&author_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|&row| (row, &self.records[row.0]))
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn author(&self, author_id: AuthorId) -> Option<&Author> {
        self.authors.iter().find(|author| author.id == author_id)
    }

    /// Whether the author table lists `author_id`.
    pub fn has_author(&self, author_id: AuthorId) -> bool {
        self.author(author_id).is_some()
    }

    /// Verse numbers any author uses in `chapter`, ascending.
    pub fn verse_numbers(&self, chapter: u32) -> Option<&BTreeSet<u32>> {
        self.chapters.get(&chapter)
    }

    pub fn chapter_numbers(&self) -> impl Iterator<Item = u32> + '_ {
        self.chapters.keys().copied()
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CorpusError> {
    let file = File::open(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CorpusError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn digest_records(records: &[VerseRecord]) -> blake3::Hash {
    let mut hasher = blake3::Hasher::new();
    for record in records {
        hasher.update(&record.chapter_number.to_le_bytes());
        hasher.update(&record.verse_number.to_le_bytes());
        hasher.update(&record.author_id.0.to_le_bytes());
        for field in [&record.author_name, &record.description, &record.full_ref] {
            hasher.update(&(field.len() as u64).to_le_bytes());
            hasher.update(field.as_bytes());
        }
    }
    hasher.finalize()
}

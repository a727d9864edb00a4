use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const LIBRARY_TOML: &str = r#"
[[corpora]]
name = "Bhagavad Gita"
shorthand = "gita"
text_path = "data/gita/verses.json"
authors_path = "data/gita/authors.json"

[[corpora]]
name = "Broken"
shorthand = "broken"
text_path = "data/broken.json"
"#;

const AUTHORS_JSON: &str = r#"[
    {"id": 16, "name": "Swami Sivananda", "language": "english"},
    {"id": 21, "name": "Swami Gambirananda", "language": "english"}
]"#;

/// Chapter 2 has verses 1..=72 by author 16 and verse 47 by author 21.
fn verses_json() -> String {
    let mut rows: Vec<serde_json::Value> = (1..=72)
        .map(|verse| {
            serde_json::json!({
                "chapter_number": 2,
                "verse_number": verse,
                "author_id": 16,
                "authorName": "Swami Sivananda",
                "description": format!("Sivananda on 2.{verse}"),
                "lang": "english",
            })
        })
        .collect();
    rows.push(serde_json::json!({
        "chapter_number": 2,
        "verse_number": 47,
        "author_id": 21,
        "author_name": "Swami Gambirananda",
        "description": "Your right is for action alone",
        "full_ref": "BG 2.47",
    }));
    serde_json::Value::Array(rows).to_string()
}

/// A library directory with one good corpus and one unreadable one.
pub fn library_dir() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "data/gita/verses.json", &verses_json());
    write(tmp.path(), "data/gita/authors.json", AUTHORS_JSON);
    write(tmp.path(), "data/broken.json", "{\"chapter_number\": [1, 2]}");
    let config = write(tmp.path(), "library.toml", LIBRARY_TOML);
    (tmp, config)
}

pub fn write(dir: &Path, relative: &str, contents: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}

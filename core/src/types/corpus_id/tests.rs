use super::*;

#[test]
fn corpus_id_normal_usage() {
    let id = CorpusId::try_from("gita").unwrap();
    assert_eq!(id.as_str(), "gita");
    assert_eq!(id.to_string(), "gita");
}

#[test]
fn corpus_id_is_trimmed_and_lowercased() {
    let id = CorpusId::try_from("  GiTa ").unwrap();
    assert_eq!(id.as_str(), "gita");
    assert_eq!(id, CorpusId::try_from("gita").unwrap());
}

#[test]
fn corpus_id_accepts_dash_and_underscore() {
    CorpusId::try_from("latin-library_2").unwrap();
}

#[test]
fn corpus_id_rejects_empty_string() {
    let result = CorpusId::try_from("");
    result.unwrap_err();
}

#[test]
fn corpus_id_rejects_whitespace_string() {
    let result = CorpusId::try_from("   ");
    result.unwrap_err();
}

#[test]
fn corpus_id_rejects_too_long_string() {
    let long_string = "a".repeat(MAX_CORPUS_ID_LENGTH + 1);
    let result = CorpusId::try_from(long_string.as_str());
    result.unwrap_err();
}

#[test]
fn corpus_id_rejects_path_characters() {
    for bad in ["../gita", "gi ta", "gita/1", "gîta"] {
        assert!(CorpusId::try_from(bad).is_err(), "accepted {bad:?}");
    }
}

#[test]
fn corpus_id_ordering() {
    const IDS: [&str; 4] = ["alex", "const", "gal", "gita"];

    for l in IDS.iter() {
        for r in IDS.iter() {
            let id_l = CorpusId::try_from(*l).unwrap();
            let id_r = CorpusId::try_from(*r).unwrap();
            assert_eq!(id_l.cmp(&id_r), l.cmp(r), "Comparing '{}' and '{}'", l, r);
        }
    }
}

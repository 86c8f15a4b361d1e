//! Intermediate-store round-trip and malformed-record handling.

use std::fs;

use freqrank::{CountRecord, FreqError, IntermediateStore, RankRecord, RankedOutput};
use tempfile::tempdir;

// ==================== Helpers ====================

fn record(token: &str, count: u64) -> CountRecord {
    CountRecord {
        token: token.to_string(),
        count,
    }
}

// ==================== Round-Trip ====================

#[test]
fn test_write_then_read_preserves_records_exactly() {
    let dir = tempdir().unwrap();
    let store = IntermediateStore::new(dir.path().join("counts"));

    let records = vec![
        record("ant", 1),
        record("cat", 42),
        record("dog", u64::MAX),
    ];
    store.write(&records).unwrap();

    assert!(store.exists());
    assert_eq!(store.read().unwrap(), records, "round-trip must be lossless");
}

#[test]
fn test_store_format_is_token_tab_count() {
    let dir = tempdir().unwrap();
    let store = IntermediateStore::new(dir.path().join("counts"));
    store.write(&[record("sat", 2), record("cat", 1)]).unwrap();

    let contents = fs::read_to_string(store.path()).unwrap();
    assert_eq!(contents, "sat\t2\ncat\t1\n");
}

#[test]
fn test_empty_store_round_trips() {
    let dir = tempdir().unwrap();
    let store = IntermediateStore::new(dir.path().join("counts"));
    store.write(&[]).unwrap();
    assert!(store.read().unwrap().is_empty());
}

#[test]
fn test_remove_published_store() {
    let dir = tempdir().unwrap();
    let store = IntermediateStore::new(dir.path().join("counts"));
    store.write(&[record("cat", 1)]).unwrap();
    store.remove().unwrap();
    assert!(!store.exists());

    // Removing an absent store is fine.
    store.remove().unwrap();
}

// ==================== Malformed Records ====================

#[test]
fn test_malformed_line_is_an_error_not_a_zero() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("counts");
    fs::write(&path, "cat\t1\nbroken\nsat\t2\n").unwrap();

    let err = IntermediateStore::new(&path).read().unwrap_err();
    match err {
        FreqError::MalformedRecord { line, content } => {
            assert_eq!(line, 2);
            assert_eq!(content, "broken");
        }
        other => panic!("expected MalformedRecord, got {:?}", other),
    }
}

#[test]
fn test_non_numeric_count_is_malformed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("counts");
    fs::write(&path, "cat\tmany\n").unwrap();
    assert!(matches!(
        IntermediateStore::new(&path).read(),
        Err(FreqError::MalformedRecord { line: 1, .. })
    ));
}

#[test]
fn test_extra_field_is_malformed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("counts");
    fs::write(&path, "cat\t1\textra\n").unwrap();
    assert!(matches!(
        IntermediateStore::new(&path).read(),
        Err(FreqError::MalformedRecord { line: 1, .. })
    ));
}

#[test]
fn test_signed_count_is_malformed() {
    // The writer never emits a sign, so a `+` prefix is corruption and must
    // not be read back as a valid count.
    let dir = tempdir().unwrap();
    let path = dir.path().join("counts");
    fs::write(&path, "cat\t+1\n").unwrap();
    assert!(matches!(
        IntermediateStore::new(&path).read(),
        Err(FreqError::MalformedRecord { line: 1, .. })
    ));
}

#[test]
fn test_negative_count_is_malformed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("counts");
    fs::write(&path, "cat\t-1\n").unwrap();
    assert!(matches!(
        IntermediateStore::new(&path).read(),
        Err(FreqError::MalformedRecord { line: 1, .. })
    ));
}

// ==================== Ranked Output ====================

#[test]
fn test_ranked_output_format_is_count_tab_token() {
    let dir = tempdir().unwrap();
    let output = RankedOutput::new(dir.path().join("ranked"));
    output
        .write(&[
            RankRecord {
                count: 2,
                token: "sat".to_string(),
            },
            RankRecord {
                count: 1,
                token: "cat".to_string(),
            },
        ])
        .unwrap();

    let contents = fs::read_to_string(output.path()).unwrap();
    assert_eq!(contents, "2\tsat\n1\tcat\n");
}

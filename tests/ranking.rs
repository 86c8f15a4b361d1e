//! Rank record emission and the descending total order.

use std::cmp::Ordering;

use freqrank::{descending_count_order, sort_ranked, CountRecord, RankRecord};

// ==================== Helpers ====================

fn rank(count: u64, token: &str) -> RankRecord {
    RankRecord {
        count,
        token: token.to_string(),
    }
}

// ==================== Emission ====================

#[test]
fn test_emit_swaps_key_and_value() {
    let record = CountRecord {
        token: "sat".to_string(),
        count: 2,
    };
    let ranked = RankRecord::from(record);
    assert_eq!(ranked, rank(2, "sat"));
}

#[test]
fn test_emit_preserves_token_verbatim() {
    let record = CountRecord {
        token: "weird-token_x".to_string(),
        count: 7,
    };
    assert_eq!(RankRecord::from(record).token, "weird-token_x");
}

#[test]
fn test_emit_passes_zero_count_through() {
    // Zero counts are never produced upstream, but emission must not
    // special-case them.
    let record = CountRecord {
        token: "ghost".to_string(),
        count: 0,
    };
    assert_eq!(RankRecord::from(record), rank(0, "ghost"));
}

// ==================== Comparator ====================

#[test]
fn test_higher_count_sorts_first() {
    assert_eq!(
        descending_count_order(&rank(3, "zebra"), &rank(1, "ant")),
        Ordering::Less,
        "higher count must sort before lower regardless of token"
    );
    assert_eq!(
        descending_count_order(&rank(1, "ant"), &rank(3, "zebra")),
        Ordering::Greater
    );
}

#[test]
fn test_ties_break_by_token_bytes_ascending() {
    assert_eq!(
        descending_count_order(&rank(2, "cat"), &rank(2, "dog")),
        Ordering::Less
    );
    assert_eq!(
        descending_count_order(&rank(2, "dog"), &rank(2, "cat")),
        Ordering::Greater
    );
}

#[test]
fn test_identical_records_compare_equal() {
    assert_eq!(
        descending_count_order(&rank(2, "cat"), &rank(2, "cat")),
        Ordering::Equal
    );
}

#[test]
fn test_comparator_is_total_and_antisymmetric() {
    let records = [
        rank(0, ""),
        rank(0, "a"),
        rank(1, "a"),
        rank(1, "b"),
        rank(2, "a"),
        rank(u64::MAX, "z"),
    ];
    for a in &records {
        for b in &records {
            let ab = descending_count_order(a, b);
            let ba = descending_count_order(b, a);
            assert_eq!(ab, ba.reverse(), "antisymmetry for {:?} vs {:?}", a, b);
        }
    }
}

// ==================== Sorting ====================

#[test]
fn test_sort_ranked_full_ordering_invariant() {
    let mut records = vec![
        rank(1, "dog"),
        rank(3, "sat"),
        rank(1, "cat"),
        rank(2, "mat"),
        rank(3, "ant"),
        rank(1, "bird"),
    ];
    sort_ranked(&mut records);

    assert_eq!(
        records,
        vec![
            rank(3, "ant"),
            rank(3, "sat"),
            rank(2, "mat"),
            rank(1, "bird"),
            rank(1, "cat"),
            rank(1, "dog"),
        ]
    );

    // Invariant check over adjacent pairs: counts non-increasing, ties in
    // byte-ascending token order.
    for pair in records.windows(2) {
        assert!(pair[0].count >= pair[1].count);
        if pair[0].count == pair[1].count {
            assert!(pair[0].token.as_bytes() <= pair[1].token.as_bytes());
        }
    }
}

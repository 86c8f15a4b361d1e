//! Count-keyed ranking records and the descending total order over them.

use std::cmp::Ordering;

use crate::types::{CountRecord, RankRecord};

impl From<CountRecord> for RankRecord {
    /// Swap key and value roles so ordering is driven by count. One-to-one,
    /// no filtering; a zero count passes through unchanged.
    fn from(record: CountRecord) -> Self {
        Self {
            count: record.count,
            token: record.token,
        }
    }
}

/// Total order for ranked output: higher count first, ties broken by token
/// bytes ascending so equal counts come out in one reproducible order no
/// matter how the upstream aggregation was parallelized.
///
/// The rule is written out directly rather than as a sign-flipped ascending
/// comparison, keeping equal-count boundaries exact.
pub fn descending_count_order(a: &RankRecord, b: &RankRecord) -> Ordering {
    b.count
        .cmp(&a.count)
        .then_with(|| a.token.as_bytes().cmp(b.token.as_bytes()))
}

/// Sort ranked records into final output order in one global pass.
pub fn sort_ranked(records: &mut [RankRecord]) {
    records.sort_unstable_by(descending_count_order);
}

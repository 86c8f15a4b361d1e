//! Commutative, associative aggregation of token occurrence counts.

use std::collections::BTreeMap;

use crate::types::CountRecord;

/// Occurrence counter usable both as a per-partition pre-aggregation and as
/// the authoritative per-token reduction.
///
/// Counting is plain addition, so merging pre-merged partial results is
/// equivalent to counting the raw occurrences directly: partials can be
/// combined in any order and any grouping without changing the totals.
#[derive(Debug, Clone, Default)]
pub struct CountAggregator {
    counts: BTreeMap<String, u64>,
}

impl CountAggregator {
    /// Create an empty aggregator. Every token starts at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of a token.
    pub fn observe(&mut self, token: String) {
        *self.counts.entry(token).or_insert(0) += 1;
    }

    /// Fold in a partial count for a token.
    pub fn add(&mut self, token: String, count: u64) {
        *self.counts.entry(token).or_insert(0) += count;
    }

    /// Merge another aggregator into this one.
    pub fn merge(&mut self, other: CountAggregator) {
        for (token, count) in other.counts {
            self.add(token, count);
        }
    }

    /// Current count for a token (0 if unseen).
    pub fn get(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens seen.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no tokens have been seen.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total occurrences across all tokens.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Drain into records ordered by token. The ordered backing map makes
    /// this output identical for any partitioning of the same input.
    pub fn into_records(self) -> Vec<CountRecord> {
        self.counts
            .into_iter()
            .map(|(token, count)| CountRecord { token, count })
            .collect()
    }
}

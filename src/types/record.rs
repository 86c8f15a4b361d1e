//! Value records exchanged between the counting and sorting stages.

use serde::Serialize;

/// Aggregated occurrences of one token within a counting-stage output.
///
/// Uniquely keyed by token: the counting stage emits at most one record per
/// token, and its count equals the number of surviving occurrences of that
/// token across the whole input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountRecord {
    pub token: String,
    pub count: u64,
}

/// A count-keyed record for the sorting stage, derived 1:1 from a
/// [`CountRecord`] with the token preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankRecord {
    pub count: u64,
    pub token: String,
}

//! Shared value types and the crate-wide error type.

pub mod error;
pub mod record;

pub use error::{FreqError, FreqResult};
pub use record::{CountRecord, RankRecord};

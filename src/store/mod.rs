//! Durable line stores between and after the pipeline stages. Each store is
//! published atomically: a file visible at its final path is always complete.

pub mod intermediate;
pub mod ranked;

pub use intermediate::IntermediateStore;
pub use ranked::RankedOutput;

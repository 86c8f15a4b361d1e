//! Core counting and ranking algorithms. Pure computation only; durable
//! stores and stage sequencing live in `store` and `pipeline`.

pub mod aggregate;
pub mod normalize;
pub mod rank;
pub mod tokenizer;

pub use aggregate::CountAggregator;
pub use normalize::Normalizer;
pub use rank::{descending_count_order, sort_ranked};
pub use tokenizer::Tokenizer;

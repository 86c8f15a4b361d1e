//! Batch word-frequency counting and ranking.
//!
//! Two chained stages over durable line stores: a counting stage that
//! tokenizes, filters, and aggregates word occurrences (with a local
//! pre-aggregation before the global merge), and a sorting stage that
//! re-keys the aggregate by count and produces one globally ordered ranking,
//! highest count first, ties broken by token bytes ascending.

pub mod engine;
pub mod lexicon;
pub mod pipeline;
pub mod store;
pub mod types;

pub use engine::aggregate::CountAggregator;
pub use engine::normalize::Normalizer;
pub use engine::rank::{descending_count_order, sort_ranked};
pub use engine::tokenizer::Tokenizer;
pub use lexicon::Lexicon;
pub use pipeline::{Pipeline, PipelineConfig, PipelineReport, Stage, StageReport};
pub use store::intermediate::IntermediateStore;
pub use store::ranked::RankedOutput;
pub use types::{CountRecord, FreqError, FreqResult, RankRecord};

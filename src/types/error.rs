//! Crate-wide error type and result alias.

use std::path::PathBuf;

use thiserror::Error;

use crate::pipeline::Stage;

/// Result alias used throughout the crate.
pub type FreqResult<T> = Result<T, FreqError>;

/// Errors surfaced by the counting and ranking pipeline.
#[derive(Debug, Error)]
pub enum FreqError {
    /// A punctuation or stop-word resource could not be loaded. Fatal:
    /// reference data is required for correctness, so nothing is processed
    /// without it.
    #[error("failed to load {resource} list from {path}: {source}")]
    ResourceLoad {
        resource: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An intermediate-store line did not parse as `<token>\t<count>`.
    /// Always surfaced as a stage failure, never skipped or read as zero.
    #[error("malformed intermediate record at line {line}: {content:?}")]
    MalformedRecord { line: usize, content: String },

    /// A stage did not run to completion. The pipeline stays in the failed
    /// stage so the caller can retry it whole.
    #[error("{stage} stage did not complete: {source}")]
    StageIncomplete {
        stage: Stage,
        #[source]
        source: Box<FreqError>,
    },

    /// A stage was invoked while the pipeline was in a different state.
    #[error("pipeline is in the {actual} state, expected {expected}")]
    StageOrder { expected: Stage, actual: Stage },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

//! Two-stage pipeline coordinator: counting, then sorting, then done.
//!
//! Stages run strictly in order with a full completion barrier between them:
//! sorting needs the complete, stable count dataset before a single global
//! ordering pass can produce one ranked output. A stage that fails does not
//! advance the state machine, so the caller retries counting whole or sorting
//! alone against the already-published intermediate store.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use log::info;
use serde::Serialize;

use crate::engine::aggregate::CountAggregator;
use crate::engine::rank::sort_ranked;
use crate::engine::tokenizer::Tokenizer;
use crate::lexicon::Lexicon;
use crate::store::intermediate::IntermediateStore;
use crate::store::ranked::RankedOutput;
use crate::types::{FreqError, FreqResult, RankRecord};

/// Pipeline lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Tokenizing and aggregating the input into the intermediate store.
    Counting,
    /// Re-keying by count and producing the globally ordered output.
    Sorting,
    /// Both stages complete; output available at the configured destination.
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Counting => "counting",
            Stage::Sorting => "sorting",
            Stage::Done => "done",
        };
        f.write_str(name)
    }
}

/// Where the pipeline reads and writes.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Line-oriented input corpus.
    pub input: PathBuf,
    /// Location of the intermediate token-count store.
    pub intermediate: PathBuf,
    /// Destination for the ranked output.
    pub output: PathBuf,
    /// Number of independent counting partitions. Partition units are pure
    /// and counting is order-independent, so this is a throughput knob with
    /// no effect on the published records.
    pub partitions: usize,
}

/// Per-stage accounting for the run report.
#[derive(Debug, Clone, Serialize)]
pub struct StageReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub records_in: u64,
    pub records_out: u64,
}

/// Summary of a completed pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    pub counting: StageReport,
    pub sorting: StageReport,
    pub distinct_tokens: u64,
    pub total_occurrences: u64,
}

/// Coordinates the counting and sorting stages over durable stores.
pub struct Pipeline<'a> {
    lexicon: &'a Lexicon,
    config: PipelineConfig,
    stage: Stage,
    distinct_tokens: u64,
    total_occurrences: u64,
}

impl<'a> Pipeline<'a> {
    pub fn new(lexicon: &'a Lexicon, config: PipelineConfig) -> Self {
        Self {
            lexicon,
            config,
            stage: Stage::Counting,
            distinct_tokens: 0,
            total_occurrences: 0,
        }
    }

    /// Current lifecycle state.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Run both stages to completion.
    pub fn run(&mut self) -> FreqResult<PipelineReport> {
        let counting = self.run_counting()?;
        let sorting = self.run_sorting()?;
        Ok(PipelineReport {
            counting,
            sorting,
            distinct_tokens: self.distinct_tokens,
            total_occurrences: self.total_occurrences,
        })
    }

    /// COUNTING: tokenize and aggregate the whole input, then publish the
    /// intermediate store.
    ///
    /// On failure nothing is published and the state stays at `Counting`:
    /// partial counts are indistinguishable from complete ones, so the stage
    /// is only ever retried whole.
    pub fn run_counting(&mut self) -> FreqResult<StageReport> {
        self.expect_stage(Stage::Counting)?;
        let started_at = Utc::now();
        info!(
            "counting stage: {} -> {} ({} partitions)",
            self.config.input.display(),
            self.config.intermediate.display(),
            self.config.partitions.max(1)
        );

        let (records_in, records_out) = self.count_input().map_err(|source| {
            FreqError::StageIncomplete {
                stage: Stage::Counting,
                source: Box::new(source),
            }
        })?;

        self.stage = Stage::Sorting;
        info!(
            "counting stage complete: {} lines in, {} count records out",
            records_in, records_out
        );
        Ok(StageReport {
            started_at,
            finished_at: Utc::now(),
            records_in,
            records_out,
        })
    }

    /// SORTING: read the complete intermediate store, re-key by count, sort
    /// the entire dataset in one global pass, publish the ranked output.
    ///
    /// On failure the state stays at `Sorting`; the intermediate store is
    /// immutable, so only this stage needs to be retried.
    pub fn run_sorting(&mut self) -> FreqResult<StageReport> {
        self.expect_stage(Stage::Sorting)?;
        let started_at = Utc::now();
        info!(
            "sorting stage: {} -> {}",
            self.config.intermediate.display(),
            self.config.output.display()
        );

        let (records_in, records_out) = self.sort_intermediate().map_err(|source| {
            FreqError::StageIncomplete {
                stage: Stage::Sorting,
                source: Box::new(source),
            }
        })?;

        self.stage = Stage::Done;
        info!(
            "sorting stage complete: {} count records in, {} ranked records out",
            records_in, records_out
        );
        Ok(StageReport {
            started_at,
            finished_at: Utc::now(),
            records_in,
            records_out,
        })
    }

    fn count_input(&mut self) -> FreqResult<(u64, u64)> {
        let lines = read_input(&self.config.input)?;
        let tokenizer = Tokenizer::new(self.lexicon);

        // Local pre-aggregation per partition cuts the volume handed to the
        // global merge; valid because counting commutes and associates.
        let mut global = CountAggregator::new();
        for partition in partition_chunks(&lines, self.config.partitions) {
            let mut local = CountAggregator::new();
            for line in partition {
                for token in tokenizer.tokenize(line) {
                    local.observe(token);
                }
            }
            global.merge(local);
        }

        self.distinct_tokens = global.len() as u64;
        self.total_occurrences = global.total();
        let records = global.into_records();
        IntermediateStore::new(&self.config.intermediate).write(&records)?;
        Ok((lines.len() as u64, records.len() as u64))
    }

    /// Returns (intermediate records read, ranked records written), counted
    /// at each end of the stage rather than assumed equal.
    fn sort_intermediate(&self) -> FreqResult<(u64, u64)> {
        let records = IntermediateStore::new(&self.config.intermediate).read()?;
        let records_in = records.len() as u64;
        let mut ranked: Vec<RankRecord> = records.into_iter().map(RankRecord::from).collect();
        sort_ranked(&mut ranked);
        RankedOutput::new(&self.config.output).write(&ranked)?;
        Ok((records_in, ranked.len() as u64))
    }

    fn expect_stage(&self, expected: Stage) -> FreqResult<()> {
        if self.stage != expected {
            return Err(FreqError::StageOrder {
                expected,
                actual: self.stage,
            });
        }
        Ok(())
    }
}

fn read_input(path: &std::path::Path) -> FreqResult<Vec<String>> {
    let file = File::open(path)?;
    let mut lines = Vec::new();
    for line in BufReader::new(file).lines() {
        lines.push(line?);
    }
    Ok(lines)
}

/// Split lines into at most `partitions` contiguous chunks. An empty input
/// yields no chunks.
fn partition_chunks(lines: &[String], partitions: usize) -> impl Iterator<Item = &[String]> {
    let size = lines.len().div_ceil(partitions.max(1)).max(1);
    lines.chunks(size)
}

//! Command-line wrapper around the counting-and-ranking pipeline.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use freqrank::{Lexicon, Pipeline, PipelineConfig};

/// Count word frequencies in a text corpus and rank them, highest first.
#[derive(Parser)]
#[command(name = "freqrank", version, about)]
struct Cli {
    /// Input corpus (one record per line).
    input: PathBuf,

    /// Destination for the ranked `<count>\t<token>` output.
    output: PathBuf,

    /// Location of the intermediate token-count store.
    #[arg(long, default_value = "word-count-temp")]
    intermediate: PathBuf,

    /// Number of counting partitions. Output is identical for any value.
    #[arg(long, default_value_t = 1)]
    partitions: usize,

    /// Punctuation symbol list, one symbol per line (defaults to the
    /// embedded list).
    #[arg(long)]
    punctuation: Option<PathBuf>,

    /// Stop-word list, one word per line (defaults to the embedded list).
    #[arg(long)]
    stop_words: Option<PathBuf>,

    /// Print the run report as JSON on stdout.
    #[arg(long)]
    json_report: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Reference lists are required for correctness; a load failure aborts
    // before any input is processed.
    let custom;
    let lexicon = if cli.punctuation.is_some() || cli.stop_words.is_some() {
        custom = Lexicon::load(cli.punctuation.as_deref(), cli.stop_words.as_deref())?;
        &custom
    } else {
        Lexicon::global()
    };

    let config = PipelineConfig {
        input: cli.input,
        intermediate: cli.intermediate,
        output: cli.output.clone(),
        partitions: cli.partitions,
    };

    let mut pipeline = Pipeline::new(lexicon, config);
    let report = pipeline.run().context("pipeline failed")?;

    if cli.json_report {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "ranked {} distinct tokens ({} occurrences) into {}",
            report.distinct_tokens,
            report.total_occurrences,
            cli.output.display()
        );
    }
    Ok(())
}

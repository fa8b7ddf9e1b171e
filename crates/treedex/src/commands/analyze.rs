//! Analyze command — one document, one 24-field row.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use treedex_core::Config;
use treedex_core::batch::AnalysisRecord;
use treedex_core::table;

use super::{emit_rows, obtain_trees, read_input_file};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File to analyze (bracketed trees; raw text with --raw).
    pub file: Utf8PathBuf,

    /// Write the CSV table here instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<Utf8PathBuf>,

    /// Treat the input as raw text and run the external parser first.
    #[arg(long)]
    pub raw: bool,

    /// External parser command (overrides the configured one).
    #[arg(long, value_name = "CMD")]
    pub parser: Option<String>,
}

/// Count structures and derive complexity indices for one document.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, raw = args.raw, "executing analyze command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let trees = obtain_trees(&content, args.raw, args.parser.as_deref(), config)
        .with_context(|| format!("failed to analyze {}", args.file))?;

    let identifier = args.file.file_name().unwrap_or(args.file.as_str());
    let record = AnalysisRecord::build(identifier, &trees);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    let rows = vec![table::header_row(), table::record_row(&record)];
    if emit_rows(&rows, args.output.as_deref())? {
        println!(
            "{} {} ({} words, {} sentences)",
            "Wrote:".green(),
            args.output.as_deref().map_or("", |p| p.as_str()),
            record.counts.words,
            record.counts.sentences,
        );
    }

    Ok(())
}

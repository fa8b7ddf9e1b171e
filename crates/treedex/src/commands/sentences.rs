//! Sentences command — per-sentence rows with Simple/Complex labels.
//!
//! Each tree of the input is one sentence unit. Complex sentences are the
//! ones worth imitating; the summary line calls them out.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use treedex_core::batch::DocumentAnalysis;
use treedex_core::table;
use treedex_core::{Config, UnitLabel};

use super::{emit_rows, obtain_trees, read_input_file};

/// Arguments for the `sentences` subcommand.
#[derive(Args, Debug)]
pub struct SentencesArgs {
    /// File to analyze (bracketed trees, one per sentence; raw text with --raw).
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

/// Label every sentence of a document Simple or Complex.
#[instrument(name = "cmd_sentences", skip_all, fields(file = %args.file))]
pub fn cmd_sentences(
    args: SentencesArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, raw = args.raw, "executing sentences command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let trees = obtain_trees(&content, args.raw, args.parser.as_deref(), config)
        .with_context(|| format!("failed to analyze {}", args.file))?;

    let prefix = args.file.file_stem().unwrap_or(args.file.as_str());
    let analysis = DocumentAnalysis::build(prefix, &trees);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    let mut rows = vec![table::labeled_header_row()];
    rows.extend(analysis.sentences.iter().map(table::labeled_row));
    let wrote = emit_rows(&rows, args.output.as_deref())?;

    let complex = analysis
        .sentences
        .iter()
        .filter(|l| l.label == UnitLabel::Complex)
        .count();
    if wrote {
        println!(
            "{} {}: {} sentences, {} {}",
            "Wrote:".green(),
            args.output.as_deref().map_or("", |p| p.as_str()),
            analysis.sentences.len(),
            complex,
            "complex".yellow(),
        );
    }

    Ok(())
}

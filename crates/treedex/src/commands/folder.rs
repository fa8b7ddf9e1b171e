//! Folder command — one row per tree file in a directory.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use globset::Glob;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use tracing::{debug, instrument, warn};

use treedex_core::Config;
use treedex_core::batch::{BatchOutcome, analyze_batch};
use treedex_core::table;

use super::{emit_rows, read_input_file};

/// Default glob for selecting tree files.
const DEFAULT_INCLUDE: &str = "*.trees";

/// Arguments for the `folder` subcommand.
#[derive(Args, Debug)]
pub struct FolderArgs {
    /// Directory holding one tree file per unit.
    pub dir: Utf8PathBuf,

    /// Glob for selecting files within the directory.
    #[arg(long, value_name = "GLOB")]
    pub include: Option<String>,

    /// Write the CSV table here instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<Utf8PathBuf>,
}

/// Analyze every matching file in a directory, in filename order.
#[instrument(name = "cmd_folder", skip_all, fields(dir = %args.dir))]
pub fn cmd_folder(
    args: FolderArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let include = args
        .include
        .as_deref()
        .or(config.include.as_deref())
        .unwrap_or(DEFAULT_INCLUDE);
    debug!(dir = %args.dir, include, "executing folder command");

    let files = select_files(&args.dir, include)?;
    if files.is_empty() {
        anyhow::bail!("no files matching {include} in {}", args.dir);
    }

    let bar = if global_json || args.output.is_none() {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(files.len() as u64).with_style(
            ProgressStyle::with_template("{bar:30} {pos}/{len} {msg}").expect("valid template"),
        )
    };

    let mut units: Vec<(String, String)> = Vec::with_capacity(files.len());
    for file in &files {
        bar.set_message(file.file_name().unwrap_or_default().to_string());
        match read_input_file(file, max_input_bytes) {
            Ok(content) => {
                let name = file.file_name().unwrap_or(file.as_str()).to_string();
                units.push((name, content));
            }
            Err(err) => warn!(file = %file, error = %err, "skipping unreadable file"),
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    let outcome = analyze_batch(units);
    report(&outcome, global_json, args.output.as_deref())
}

/// Files in `dir` matching the glob, sorted by name.
fn select_files(dir: &Utf8Path, include: &str) -> anyhow::Result<Vec<Utf8PathBuf>> {
    let matcher = Glob::new(include)
        .with_context(|| format!("invalid glob: {include}"))?
        .compile_matcher();

    let mut files = Vec::new();
    let entries =
        std::fs::read_dir(dir.as_std_path()).with_context(|| format!("failed to read {dir}"))?;
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to read {dir}"))?;
        if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            continue;
        }
        let Ok(path) = Utf8PathBuf::from_path_buf(entry.path()) else {
            warn!(path = %entry.path().display(), "skipping non-UTF-8 path");
            continue;
        };
        if path.file_name().is_some_and(|name| matcher.is_match(name)) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Emit the batch outcome as JSON or CSV.
fn report(outcome: &BatchOutcome, global_json: bool, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    if global_json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
        return Ok(());
    }

    let mut rows = vec![table::header_row()];
    rows.extend(outcome.records.iter().map(table::record_row));
    let wrote = emit_rows(&rows, output)?;

    for failure in &outcome.failures {
        eprintln!(
            "{} {}: {}",
            "skipped".red(),
            failure.identifier,
            failure.reason
        );
    }
    if wrote {
        println!(
            "{} {} ({} units, {} skipped)",
            "Wrote:".green(),
            output.map_or("", Utf8Path::as_str),
            outcome.records.len(),
            outcome.failures.len(),
        );
    }

    Ok(())
}

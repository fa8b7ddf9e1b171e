//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;
use treedex_core::Config;
use treedex_core::tree::{Tree, parse_forest};

use crate::parser::ExternalParser;
use treedex_core::parser::ParserService;

pub mod analyze;
pub mod folder;
pub mod info;
pub mod sentences;

/// Read a file and validate its size against the configured limit.
///
/// Combines the file-read and size-validation steps that every analysis
/// command needs.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Turn input file content into trees.
///
/// Content is bracketed notation by default; with `raw` set, the external
/// parser command (from the flag or the config) produces the trees first.
pub fn obtain_trees(
    content: &str,
    raw: bool,
    parser_flag: Option<&str>,
    config: &Config,
) -> anyhow::Result<Vec<Tree>> {
    if raw {
        let command = parser_flag
            .or(config.parser_command.as_deref())
            .context("no parser command configured; set parser_command or pass --parser")?;
        let parser = ExternalParser::from_command_line(command)
            .context("parser command is empty")?;
        Ok(parser.parse_text(content)?)
    } else {
        Ok(parse_forest(content)?)
    }
}

/// Write rows to a file, or print them to stdout when no path is given.
pub fn emit_rows(rows: &[String], output: Option<&Utf8Path>) -> anyhow::Result<bool> {
    if let Some(path) = output {
        std::fs::write(path.as_std_path(), format!("{}\n", rows.join("\n")))
            .with_context(|| format!("failed to write {path}"))?;
        Ok(true)
    } else {
        for row in rows {
            println!("{row}");
        }
        Ok(false)
    }
}

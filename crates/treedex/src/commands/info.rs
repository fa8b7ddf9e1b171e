//! Info command — package and configuration details.

use clap::Args;
use serde::Serialize;
use tracing::instrument;

use treedex_core::Config;
use treedex_core::config::ConfigSources;

/// Arguments for the `info` subcommand.
#[derive(Args, Debug)]
pub struct InfoArgs {}

#[derive(Serialize)]
struct InfoReport<'a> {
    name: &'a str,
    version: &'a str,
    description: &'a str,
    config_file: Option<&'a str>,
    parser_command: Option<&'a str>,
}

/// Show package information and the active configuration source.
#[instrument(name = "cmd_info", skip_all)]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    let report = InfoReport {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        description: env!("CARGO_PKG_DESCRIPTION"),
        config_file: sources.primary_file().map(camino::Utf8Path::as_str),
        parser_command: config.parser_command.as_deref(),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} {}", report.name, report.version);
    println!("{}", report.description);
    println!("config file: {}", report.config_file.unwrap_or("(none)"));
    println!(
        "parser command: {}",
        report.parser_command.unwrap_or("(not configured)")
    );

    Ok(())
}

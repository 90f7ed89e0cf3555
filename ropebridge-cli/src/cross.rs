//! `cross` and `show` command implementations.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use ropebridge_core::simulate;
use serde::{Deserialize, Serialize};

use crate::input::{load_bridges, require_existing};
use crate::render::{write_bridges, write_json, write_summary, write_trace};
use crate::{ARG_FORMAT, ARG_INPUT, ARG_SHOW_INPUT, ARG_TRACE, CliError, DEFAULT_INPUT};

/// How the crossing report is written to standard output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// Human-readable summary.
    #[default]
    Text,
    /// The full report, including every trip, as pretty JSON.
    Json,
}

/// CLI arguments for the `cross` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Cross every bridge in the bridge file, ferrying each waiting \
                 hiker with the fastest one, and report the minutes spent on \
                 each bridge. Options can come from CLI flags, configuration \
                 files, or environment variables.",
    about = "Compute crossing times for a bridge file"
)]
#[ortho_config(prefix = "ROPEBRIDGE")]
pub(crate) struct CrossArgs {
    /// Path to the bridge file (YAML, or JSON with a `.json` extension).
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) input: Option<Utf8PathBuf>,
    /// Output format for the report.
    #[arg(long = ARG_FORMAT, value_enum, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
    /// Print the bridges and hikers before crossing.
    #[arg(
        long = ARG_SHOW_INPUT,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "bool"
    )]
    #[serde(default)]
    pub(crate) show_input: Option<bool>,
    /// Print every trip walked on every bridge.
    #[arg(
        long = ARG_TRACE,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "bool"
    )]
    #[serde(default)]
    pub(crate) trace: Option<bool>,
}

impl CrossArgs {
    pub(crate) fn into_config(self) -> Result<CrossConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(CrossConfig::from(merged))
    }
}

/// Resolved `cross` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CrossConfig {
    pub(crate) input: Utf8PathBuf,
    pub(crate) format: OutputFormat,
    pub(crate) show_input: bool,
    pub(crate) trace: bool,
}

impl From<CrossArgs> for CrossConfig {
    fn from(args: CrossArgs) -> Self {
        Self {
            input: resolve_input(args.input),
            format: args.format.unwrap_or_default(),
            show_input: args.show_input.unwrap_or(false),
            trace: args.trace.unwrap_or(false),
        }
    }
}

/// CLI arguments for the `show` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(about = "List the bridges and hikers in a bridge file")]
#[ortho_config(prefix = "ROPEBRIDGE")]
pub(crate) struct ShowArgs {
    /// Path to the bridge file (YAML, or JSON with a `.json` extension).
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) input: Option<Utf8PathBuf>,
}

impl ShowArgs {
    pub(crate) fn into_input(self) -> Result<Utf8PathBuf, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(resolve_input(merged.input))
    }
}

fn resolve_input(input: Option<Utf8PathBuf>) -> Utf8PathBuf {
    input.unwrap_or_else(|| {
        info!("no bridge file given, using default file {DEFAULT_INPUT}");
        Utf8PathBuf::from(DEFAULT_INPUT)
    })
}

pub(crate) fn run_cross_with(args: CrossArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_cross(&config, writer)
}

pub(crate) fn execute_cross(config: &CrossConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    require_existing(&config.input, ARG_INPUT)?;
    let bridges = load_bridges(&config.input)?;
    let report = simulate(&bridges).map_err(|source| CliError::Crossing {
        path: config.input.clone(),
        source,
    })?;
    match config.format {
        OutputFormat::Text => {
            if config.show_input {
                write_bridges(writer, &bridges)?;
            }
            if config.trace {
                write_trace(writer, &report)?;
            }
            write_summary(writer, &report)
        }
        OutputFormat::Json => write_json(writer, &report),
    }
}

pub(crate) fn run_show_with(args: ShowArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let input = args.into_input()?;
    require_existing(&input, ARG_INPUT)?;
    let bridges = load_bridges(&input)?;
    write_bridges(writer, &bridges)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<CrossConfig, CliError> {
    let merged = CrossArgs::merge_from_layers(layers).map_err(CliError::from)?;
    Ok(CrossConfig::from(merged))
}

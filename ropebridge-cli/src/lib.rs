//! Command-line interface for the rope-bridge crossing planner.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod cross;
mod error;
mod input;
mod render;

pub use error::CliError;

use cross::{CrossArgs, ShowArgs, run_cross_with, run_show_with};

pub(crate) const ARG_INPUT: &str = "input";
pub(crate) const ARG_FORMAT: &str = "format";
pub(crate) const ARG_SHOW_INPUT: &str = "show-input";
pub(crate) const ARG_TRACE: &str = "trace";
pub(crate) const DEFAULT_INPUT: &str = "hikers.yml";

/// Run the CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse()?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Cross(args) => run_cross_with(args, &mut stdout),
        Command::Show(args) => run_show_with(args, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "ropebridge",
    about = "Plan torch-lit crossings of a sequence of rope bridges",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Cross every bridge and report the time spent on each.
    Cross(CrossArgs),
    /// Print the bridges and hikers read from a bridge file.
    Show(ShowArgs),
}

#[cfg(test)]
mod tests;

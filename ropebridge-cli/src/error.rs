//! Error types emitted by the rope-bridge CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use ropebridge_core::{BridgeError, CrossingError, HikerError};
use thiserror::Error;

/// Errors emitted by the rope-bridge CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// The bridge file does not exist.
    #[error("{field} path {path:?} does not exist")]
    MissingInputFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// The bridge file path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    InputPathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// The bridge file path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectInputPath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Opening the bridge file failed.
    #[error("failed to open bridge file at {path:?}: {source}")]
    OpenInput {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The bridge file is not valid YAML for the expected layout.
    #[error("failed to parse bridge YAML at {path:?}: {source}")]
    ParseYaml {
        path: Utf8PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    /// The bridge file is not valid JSON for the expected layout.
    #[error("failed to parse bridge JSON at {path:?}: {source}")]
    ParseJson {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A hiker in the bridge file has an unusable pace.
    #[error("hiker {name:?} on bridge {bridge} in {path:?} is invalid: {source}")]
    InvalidHiker {
        path: Utf8PathBuf,
        bridge: u32,
        name: String,
        #[source]
        source: HikerError,
    },
    /// A bridge in the bridge file has an unusable length.
    #[error("bridge {bridge} in {path:?} is invalid: {source}")]
    InvalidBridge {
        path: Utf8PathBuf,
        bridge: u32,
        #[source]
        source: BridgeError,
    },
    /// The bridges could not be crossed.
    #[error("cannot cross bridges from {path:?}: {source}")]
    Crossing {
        path: Utf8PathBuf,
        #[source]
        source: CrossingError,
    },
    /// Serialising the crossing report failed.
    #[error("failed to serialise crossing report: {0}")]
    SerialiseReport(#[source] serde_json::Error),
    /// Writing to the output stream failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}

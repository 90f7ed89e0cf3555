//! Loading bridge files from disk.
//!
//! A bridge file holds a top-level `bridge` sequence. Each entry carries an
//! `id`, a `length` in feet and the `hikers` (name and pace in feet per
//! minute) who join at that bridge. Files ending in `.json` are decoded as
//! JSON; everything else is treated as YAML.

use std::io::{self, BufReader};

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use log::debug;
use ropebridge_core::{Bridge, BridgeId, Hiker};
use serde::Deserialize;

use crate::CliError;

#[derive(Debug, Deserialize)]
struct BridgeFile {
    #[serde(rename = "bridge", default)]
    bridges: Vec<BridgeRecord>,
}

#[derive(Debug, Deserialize)]
struct BridgeRecord {
    id: u32,
    length: f64,
    #[serde(default)]
    hikers: Vec<HikerRecord>,
}

#[derive(Debug, Deserialize)]
struct HikerRecord {
    name: String,
    pace: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputFormat {
    Yaml,
    Json,
}

impl InputFormat {
    pub(crate) fn for_path(path: &Utf8Path) -> Self {
        match path.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Check that `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::InputPathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            Err(CliError::MissingInputFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectInputPath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

fn is_file(path: &Utf8Path) -> io::Result<bool> {
    let parent = path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "path has no file name"))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.metadata(name).map(|meta| meta.is_file())
}

/// Read and validate the bridges described in `path`.
pub(crate) fn load_bridges(path: &Utf8Path) -> Result<Vec<Bridge>, CliError> {
    let file = fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| {
        CliError::OpenInput {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let reader = BufReader::new(file);
    let format = InputFormat::for_path(path);
    debug!("reading {format:?} bridge file {path}");
    let decoded: BridgeFile = match format {
        InputFormat::Json => {
            serde_json::from_reader(reader).map_err(|source| CliError::ParseJson {
                path: path.to_path_buf(),
                source,
            })?
        }
        InputFormat::Yaml => {
            serde_yaml::from_reader(reader).map_err(|source| CliError::ParseYaml {
                path: path.to_path_buf(),
                source,
            })?
        }
    };
    decoded
        .bridges
        .into_iter()
        .map(|record| record.into_bridge(path))
        .collect()
}

impl BridgeRecord {
    fn into_bridge(self, path: &Utf8Path) -> Result<Bridge, CliError> {
        let Self { id, length, hikers } = self;
        let roster = hikers
            .into_iter()
            .map(|HikerRecord { name, pace }| {
                Hiker::new(name.clone(), pace).map_err(|source| CliError::InvalidHiker {
                    path: path.to_path_buf(),
                    bridge: id,
                    name,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Bridge::new(BridgeId::new(id), length, roster).map_err(|source| CliError::InvalidBridge {
            path: path.to_path_buf(),
            bridge: id,
            source,
        })
    }
}

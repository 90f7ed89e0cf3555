//! Test helpers for writing bridge files into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

/// Two bridges: A and B cross the first, C joins at the second.
pub(super) const TWO_BRIDGES_YAML: &str = "\
bridge:
  - id: 0
    length: 100
    hikers:
      - name: A
        pace: 100
      - name: B
        pace: 50
  - id: 1
    length: 250
    hikers:
      - name: C
        pace: 20
";

pub(super) const TWO_BRIDGES_JSON: &str = r#"{
  "bridge": [
    { "id": 0, "length": 100, "hikers": [
      { "name": "A", "pace": 100 },
      { "name": "B", "pace": 50 }
    ] },
    { "id": 1, "length": 250, "hikers": [ { "name": "C", "pace": 20 } ] }
  ]
}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// Helper to set up a temporary directory and a bridge file path inside it.
pub(super) fn workspace(file_name: &str) -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    let path = root.join(file_name);
    (tmp, path)
}

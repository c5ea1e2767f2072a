//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use platform_qa::QaConfig;
use tempfile::TempDir;

pub fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Config reading fixtures from `tests/fixtures/data` and writing into a
/// scratch target directory that lives as long as the returned `TempDir`.
pub fn fixture_config() -> (TempDir, QaConfig) {
    let target = TempDir::new().expect("Should create temp dir");
    let config = QaConfig {
        root_path: path_string(&fixtures_path().join("data")),
        target_directory: path_string(&target.path().join("target")),
        ..QaConfig::default()
    };
    (target, config)
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

//! Scenario tests spanning the registry and the built-in loaders.
//!
//! These exercise the full register -> lookup -> open path against real
//! files on disk, including the failure modes a file-opening subsystem has
//! to distinguish (unsupported tag vs. broken file).

use std::path::PathBuf;

mod osp_tests;
mod ply_tests;

/// Create a scratch directory for a test and return its path.
///
/// Each test gets its own directory keyed by test name and process id so
/// parallel test runs never collide.
fn scratch_dir(test: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("sceneio-{}-{}", test, std::process::id()));
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

/// Write a fixture file into a scratch directory.
fn write_fixture(test: &str, filename: &str, contents: &[u8]) -> PathBuf {
    let path = scratch_dir(test).join(filename);
    std::fs::write(&path, contents).expect("write fixture");
    path
}

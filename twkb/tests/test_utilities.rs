#![allow(unused)]

use assert_cmd::{Command, cargo};
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

#[cfg(windows)]
pub const BINARY_NAME: &str = "twkb.exe";
#[cfg(not(windows))]
pub const BINARY_NAME: &str = "twkb";

/// Helper to create a Command for the twkb binary.
pub fn twkb_cmd() -> Command {
	Command::new(cargo::cargo_bin!())
}

/// Helper to get a temp file path.
pub fn get_temp_path(filename: &str) -> (TempDir, PathBuf) {
	let dir = tempdir().expect("failed to create temp dir");
	let path = dir.path().join(filename);
	(dir, path)
}

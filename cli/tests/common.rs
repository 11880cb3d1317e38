//! # Responder CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files. Each test runs the binary
//! inside its own temporary directory so that no `.responder.toml` or
//! `default.txt` from the developer's machine leaks into the run. The home
//! and config directories are redirected to `home/` inside that directory,
//! so the user-level `config.toml` is sandboxed as well.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates an `assert_cmd::Command` for the `responder` binary, running in
/// `dir` with the responder environment variables cleared and the user
/// config directory pointed at `dir/home`.
pub fn responder_cmd(dir: &Path) -> Command {
    let home = sandbox_home(dir);
    let mut cmd =
        Command::cargo_bin("responder").expect("Failed to find responder binary for testing");
    cmd.current_dir(dir)
        .env("HOME", &home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("APPDATA", &home)
        .env_remove("RESPONDER_CONFIG")
        .env_remove("RESPONDER_SEED")
        .env_remove("RUST_LOG");
    cmd
}

/// The fake home directory used by `responder_cmd` for `dir`.
pub fn sandbox_home(dir: &Path) -> PathBuf {
    dir.join("home")
}

/// Creates a temporary working directory containing a `.git` marker, which
/// stops the project config search from walking above it.
pub fn workdir() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::create_dir(dir.path().join(".git")).expect("Failed to create .git marker");
    fs::create_dir(sandbox_home(dir.path())).expect("Failed to create sandbox home");
    dir
}

/// Writes `content` to `name` inside `dir` and returns the full path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write fixture file");
    path
}

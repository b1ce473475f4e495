//! # Campus Assistant CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/campus-assistant
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test file
//! declares `mod common;` and runs the compiled `campus` binary through
//! `campus_cmd()`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// # Get Campus Command (`campus_cmd`)
///
/// Returns an `assert_cmd::Command` for the compiled `campus` binary. The
/// command runs inside a fresh temporary directory so no project
/// `.campus.toml` from the checkout is picked up. `HOME` and
/// `XDG_CONFIG_HOME` point into that directory so the developer's user config
/// is never read, and `CAMPUS_CONFIG` is cleared.
///
/// ## Panics
/// Panics if the binary cannot be found or the temp directory cannot be created.
pub fn campus_cmd() -> (Command, TempDir) {
    let workdir = TempDir::new().expect("Failed to create temp working directory");
    let mut cmd = Command::cargo_bin("campus").expect("Failed to find campus binary for testing");
    isolate(&mut cmd, workdir.path());
    (cmd, workdir)
}

/// Points the user config lookup at `workdir` and clears `CAMPUS_CONFIG`.
pub fn isolate(cmd: &mut Command, workdir: &Path) {
    cmd.current_dir(workdir)
        .env("HOME", workdir)
        .env("XDG_CONFIG_HOME", user_config_home(workdir))
        .env_remove("CAMPUS_CONFIG");
}

/// `XDG_CONFIG_HOME` used by the isolated commands.
pub fn user_config_home(workdir: &Path) -> PathBuf {
    workdir.join(".config")
}

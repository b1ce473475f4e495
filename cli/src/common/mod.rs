//! # Campus Assistant Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/campus-assistant
//!
//! ## Overview
//!
//! Shared helpers that sit between the command handlers (`commands::`) and the
//! domain (`assistant::`):
//!
//! - **`network`**: port probing and local IP detection for `campus srv`.
//! - **`ui`**: terminal rendering of transcript lines, badges and tables.
//!

/// Port probing and local address detection.
pub mod network;
/// Terminal rendering helpers.
pub mod ui;

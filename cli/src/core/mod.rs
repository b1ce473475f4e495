//! # Campus Assistant Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/campus-assistant
//!
//! ## Overview
//!
//! Foundational pieces shared by every command:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and the crate-wide `Result` alias
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{CampusError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;

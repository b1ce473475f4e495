//! # Campus Assistant Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/campus-assistant
//!
//! ## Overview
//!
//! This module defines the error types used throughout the Campus Assistant.
//! The query classifier itself is total and never produces an error; everything
//! here belongs to the surrounding shell: configuration loading, user selections
//! (categories, quick actions) and the HTTP API.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `CampusError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if name.trim().is_empty() {
//!     return Err(CampusError::Config("assistant.name must not be empty".into()))?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the Campus Assistant application.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CampusError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown knowledge category '{name}'. Expected one of: schedules, facilities, dining, library, admin.")]
    UnknownCategory { name: String },

    #[error("Unknown quick action '{selector}'. Choose a number from 1 to {available} or a label.")]
    UnknownQuickAction { selector: String, available: usize },

    #[error("Message must not be empty.")]
    EmptyMessage,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Server error: {0}")]
    Server(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

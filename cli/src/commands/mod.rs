//! # Campus Assistant Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/campus-assistant
//!
//! ## Overview
//!
//! Aggregates the top-level commands of the `campus` CLI so `main.rs` can
//! dispatch to them. Each module defines its own argument struct and a
//! `handle_*` function.
//!
//! ## Commands
//!
//! - `ask`: answer one question and exit
//! - `chat`: interactive session with typing indicator and timestamps
//! - `actions`: list or run the preset quick actions
//! - `kb`: print the knowledge base
//! - `srv`: HTTP API for the browser widget
//!

/// Quick-action listing and execution.
pub mod actions;
/// One-shot question answering.
pub mod ask;
/// Interactive terminal chat.
pub mod chat;
/// Knowledge base listing.
pub mod kb;
/// HTTP server for the chat widget. Includes configuration, routes and server logic.
pub mod srv;

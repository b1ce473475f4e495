//! # Campus Assistant HTTP Server
//!
//! File: cli/src/commands/srv/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/campus-assistant
//!
//! ## Overview
//!
//! `campus srv` exposes the assistant over HTTP so a browser chat widget can
//! talk to it. Options:
//! - Port binding (with automatic fallback if the port is in use)
//! - Host interface binding
//! - CORS on/off
//! - An optional directory of widget files served under `/`
//!
//! ## Architecture
//!
//! - `config.rs`: merges `[server]` settings with command-line flags
//! - `routes.rs`: the `/api` JSON endpoints
//! - `server_logic.rs`: router assembly, port selection, serving and shutdown
//!
//! ## Examples
//!
//! ```bash
//! # API on the default port
//! campus srv
//!
//! # Serve a widget from ./widget on all interfaces
//! campus srv --host 0.0.0.0 --port 9000 --static-dir ./widget
//! ```
//!
use crate::core::config::Config;
use crate::core::error::Result;
use tracing::info;

pub use config::SrvArgs;

/// Merges server configuration from flags and config files.
pub mod config;

/// JSON API endpoints.
pub mod routes;

/// Axum server setup and lifecycle.
pub mod server_logic;

/// # Handle Server Command (`handle_srv`)
///
/// ## Errors
///
/// Propagates configuration errors and server start-up failures.
pub async fn handle_srv(args: SrvArgs, config: &Config) -> Result<()> {
    info!("Handling srv command with args: {:?}", args);

    let server_config = config::merge_config(args, config).await?;
    info!("Effective server config: {:?}", server_config);

    server_logic::run_server(server_config).await
}

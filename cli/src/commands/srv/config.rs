//! # Campus Assistant HTTP Server Configuration
//!
//! File: cli/src/commands/srv/config.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/campus-assistant
//!
//! ## Overview
//!
//! Combines the `[server]` section of the loaded configuration with the
//! `campus srv` command-line flags:
//! 1. Command-line arguments (highest priority)
//! 2. `[server]` from the merged configuration files
//! 3. Default values (lowest priority, already applied by `core::config`)
//!
//! The optional static directory is resolved to an absolute, canonical path
//! and must exist.
//!
//! ## Examples
//!
//! ```bash
//! campus srv --port 9000 --host 0.0.0.0 --static-dir ./widget
//! ```
//!
use crate::core::config::Config;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::{env, net::IpAddr, path::PathBuf};
use tracing::debug;

/// # Server Command Arguments (`SrvArgs`)
///
/// Every flag is optional; unset flags fall back to the configuration file.
#[derive(Parser, Debug, Default)]
pub struct SrvArgs {
    /// Port to listen on [config: server.port, default: 8000].
    #[arg(long, short)]
    pub port: Option<u16>,

    /// Address to bind to [config: server.host, default: 127.0.0.1].
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Do not send CORS headers.
    #[arg(long)]
    pub no_cors: bool,

    /// Directory with a browser front end to serve under `/` [config: server.static_dir].
    #[arg(long, value_name = "DIR")]
    pub static_dir: Option<PathBuf>,
}

/// # Effective Server Configuration (`ServerConfig`)
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
    /// Canonical path of the widget directory, if any.
    pub static_dir: Option<PathBuf>,
    pub assistant_name: String,
}

/// # Merge Server Configuration (`merge_config`)
///
/// ## Errors
///
/// Fails if the static directory cannot be resolved or is not a directory.
pub async fn merge_config(args: SrvArgs, config: &Config) -> Result<ServerConfig> {
    let server = &config.server;
    let mut effective = ServerConfig {
        host: args.host.unwrap_or(server.host),
        port: args.port.unwrap_or(server.port),
        enable_cors: server.enable_cors && !args.no_cors,
        static_dir: args.static_dir.or_else(|| server.static_dir.clone()),
        assistant_name: config.assistant.name.clone(),
    };

    if effective.port == 0 {
        anyhow::bail!("Port must not be 0.");
    }
    effective.resolve_static_dir().await?;
    Ok(effective)
}

impl ServerConfig {
    /// # Resolve Static Directory (`resolve_static_dir`)
    ///
    /// Makes `static_dir` absolute and canonical, and verifies it is a
    /// directory. Does nothing when no directory is configured.
    async fn resolve_static_dir(&mut self) -> Result<()> {
        let Some(dir) = self.static_dir.as_ref() else {
            return Ok(());
        };

        let absolute = if dir.is_absolute() {
            dir.clone()
        } else {
            env::current_dir()
                .context("Failed to get current working directory")?
                .join(dir)
        };

        let canonical = tokio::fs::canonicalize(&absolute).await.with_context(|| {
            format!(
                "Static directory '{}' could not be found or accessed",
                absolute.display()
            )
        })?;
        let metadata = tokio::fs::metadata(&canonical)
            .await
            .with_context(|| format!("Failed to get metadata for '{}'", canonical.display()))?;
        if !metadata.is_dir() {
            anyhow::bail!("Path is not a directory: {}", canonical.display());
        }

        debug!("Resolved static directory to: {}", canonical.display());
        self.static_dir = Some(canonical);
        Ok(())
    }
}

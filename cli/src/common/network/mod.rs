//! # Campus Assistant Network Utilities Module (`common::network`)
//!
//! File: cli/src/common/network/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/campus-assistant
//!
//! ## Overview
//!
//! Helpers used by `campus srv` before it starts listening:
//! - `find_available_port`: bind-probe consecutive ports until one is free
//! - `get_local_ip`: best-effort LAN address for the "Network URL" banner line
//!
use crate::core::error::Result;
use std::net::{IpAddr, SocketAddr};
use tokio::net::TcpListener;
use tracing::{info, warn};

/// # Find Available Port (`find_available_port`)
///
/// Tries `start_port`, then the following ports, up to `max_attempts` in
/// total. Each probe binds and immediately drops a listener.
///
/// ## Errors
///
/// Returns an error if every attempted port is in use.
pub async fn find_available_port(
    host: IpAddr,
    start_port: u16,
    max_attempts: u8,
) -> Result<SocketAddr> {
    let mut current_port = start_port;

    for attempt in 0..max_attempts {
        let addr = SocketAddr::new(host, current_port);
        match TcpListener::bind(addr).await {
            Ok(listener) => {
                drop(listener);
                if attempt > 0 {
                    info!(
                        "Port {} was unavailable, using port {} instead.",
                        start_port, current_port
                    );
                }
                return Ok(addr);
            }
            Err(e) => {
                warn!(
                    "Attempt {}: Port {} on host {} is unavailable ({}). Trying next port...",
                    attempt + 1,
                    current_port,
                    host,
                    e
                );
                current_port = match current_port.checked_add(1) {
                    Some(next) => next,
                    None => break,
                };
            }
        }
    }

    anyhow::bail!(
        "Could not find an available port on host {} starting from port {} after trying {} ports.",
        host,
        start_port,
        max_attempts
    )
}

/// # Get Local IP Address (`get_local_ip`)
///
/// Asks the platform tools (`ipconfig`, `ip`, `ifconfig`) for a non-loopback
/// address. Falls back to `"localhost"` when none of them answers.
pub fn get_local_ip() -> String {
    let commands = [
        // macOS / BSD
        "ipconfig getifaddr en0",
        "ipconfig getifaddr en1",
        // Linux, modern then legacy tooling
        "ip addr show | grep 'inet ' | grep -v '127.0.0.1' | head -n 1 | awk '{print $2}' | cut -d/ -f1",
        "ifconfig | grep 'inet ' | grep -v '127.0.0.1' | head -n 1 | awk '{print $2}'",
    ];

    for cmd_str in commands {
        match std::process::Command::new("sh").arg("-c").arg(cmd_str).output() {
            Ok(output) if output.status.success() => {
                let ip = String::from_utf8_lossy(&output.stdout).trim().to_string();
                if !ip.is_empty() && ip != "localhost" {
                    info!("Found local IP: {}", ip);
                    return ip;
                }
            }
            Ok(_) => {}
            Err(e) => warn!("Error executing command '{}': {}", cmd_str, e),
        }
    }

    warn!("Could not detect local network IP, falling back to 'localhost'");
    "localhost".to_string()
}

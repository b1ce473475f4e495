//! # Campus Assistant HTTP Server Implementation
//!
//! File: cli/src/commands/srv/server_logic.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/campus-assistant
//!
//! ## Overview
//!
//! Runs the assistant as an HTTP service for the browser chat widget:
//! - JSON API under `/api` (see `routes`)
//! - Optional static front end served from `static_dir` for every other path
//! - Port availability checking with automatic fallback
//! - CORS configuration
//! - Graceful shutdown on Ctrl+C / SIGTERM
//!
//! ## Architecture
//!
//! 1. Find an available port, starting from the configured one
//! 2. Build the router (`create_app`) with tracing and CORS layers
//! 3. Print the connection banner
//! 4. Serve until a shutdown signal arrives
//!
use super::config::ServerConfig;
use super::routes::{self, AppState};
use crate::assistant;
use crate::common::network;
use crate::core::error::{CampusError, Result};
use anyhow::Context;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, Level};

const MAX_PORT_ATTEMPTS: u8 = 10;

/// # Run HTTP Server (`run_server`)
///
/// Binds the first free port at or after `config.port` and serves the
/// assistant API until shutdown.
///
/// ## Errors
///
/// Fails if no port is free within the allowed attempts, if binding fails,
/// or if the server stops with an error.
pub async fn run_server(config: ServerConfig) -> Result<()> {
    let addr = network::find_available_port(config.host, config.port, MAX_PORT_ATTEMPTS).await?;
    let local_ip = network::get_local_ip();

    let state = AppState {
        classifier: assistant::campus_classifier(),
        assistant_name: Arc::from(config.assistant_name.as_str()),
    };
    let app = create_app(&config, state);

    println!("\n=================================================================");
    println!("🎓 {}", config.assistant_name);
    println!("🌐 Local URL:         http://localhost:{}", addr.port());
    if local_ip != "localhost" {
        println!("🔗 Network URL:       http://{}:{}", local_ip, addr.port());
    }
    println!("⚙️  Binding to address: {}", addr);
    match &config.static_dir {
        Some(dir) => println!("📂 Widget files:      {}", dir.display()),
        None => println!("📂 Widget files:      (none, API only)"),
    }
    println!("🔒 CORS enabled:      {}", config.enable_cors);
    println!("📡 Endpoints:         GET /api/health, POST /api/chat,");
    println!("                      GET /api/quick-actions, GET /api/knowledge");
    println!("=================================================================\n");

    info!("Starting assistant server on {}", addr);
    println!("Server starting! Press Ctrl+C to stop.");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind TCP listener to address {}", addr))?;

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| CampusError::Server(e.to_string()))?;

    println!("\nServer shutdown complete.");
    Ok(())
}

/// Resolves when Ctrl+C (or SIGTERM on Unix) is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, initiating graceful shutdown..."),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received SIGTERM, initiating graceful shutdown...");
            }
            Err(e) => {
                error!(
                    "Failed to install SIGTERM handler: {}. Shutdown on SIGTERM might not work.",
                    e
                );
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// # Create Axum Application (`create_app`)
///
/// Nests the API under `/api`, falls back to the static widget directory when
/// one is configured, and wraps everything in tracing and CORS layers.
pub fn create_app(config: &ServerConfig, state: AppState) -> Router {
    let cors_layer = if config.enable_cors {
        info!("CORS middleware enabled (permissive).");
        CorsLayer::permissive()
    } else {
        info!("CORS middleware disabled.");
        CorsLayer::new()
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::default().include_headers(true))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let mut app = Router::new().nest("/api", routes::api_routes(state));
    if let Some(dir) = &config.static_dir {
        info!("Serving widget files from {}", dir.display());
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.layer(
        ServiceBuilder::new()
            .layer(trace_layer)
            .layer(cors_layer),
    )
}

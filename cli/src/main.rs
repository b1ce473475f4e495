//! # Campus Assistant Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/campus-assistant
//!
//! ## Overview
//!
//! Entry point for the `campus` CLI, a keyword-driven campus help desk that
//! answers questions about class schedules, the library, dining, facilities
//! and administrative offices. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading the layered configuration once
//! - Routing execution to the command handlers
//!
//! ## Examples
//!
//! ```bash
//! # One question
//! campus ask where is the gym
//!
//! # Interactive session with debug logging
//! campus -vv chat
//!
//! # Serve the HTTP API with an explicit config file
//! campus --config ./campus.toml srv
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Load configuration (user file, project `.campus.toml`, `--config`)
//! 4. Route to the command handler
//! 5. Format and display any errors that occur
//!
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod assistant; // Categories, knowledge base, classifier, conversation
mod commands; // Command handlers (ask, chat, actions, kb, srv)
mod common; // Shared terminal and network helpers
mod core; // Errors and configuration

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "campus",
    about = "🎓 Smart Campus Assistant: answers for schedules, library, dining, facilities and admin",
    long_about = "Ask about class schedules, library services, dining, campus facilities and \n\
                  administrative offices from the terminal, or serve the assistant over HTTP.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Extra configuration file, applied after the user and project files.
    #[arg(long, global = true, env = "CAMPUS_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,
}

/// All available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Answer a single question.
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    /// Start an interactive chat session.
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// List or run the quick actions.
    Actions(commands::actions::ActionsArgs),
    /// Show the knowledge base.
    Kb(commands::kb::KbArgs),
    /// Serve the assistant over HTTP.
    #[command(alias = "s")]
    Srv(commands::srv::SrvArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = run(cli).await;

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Loads configuration and dispatches to the selected command.
async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = crate::core::config::load_config(cli.config.as_deref())?;
    match cli.command {
        Commands::Ask(args) => commands::ask::handle_ask(args).await,
        Commands::Chat(args) => commands::chat::handle_chat(args, &config).await,
        Commands::Actions(args) => commands::actions::handle_actions(args).await,
        Commands::Kb(args) => commands::kb::handle_kb(args).await,
        Commands::Srv(args) => commands::srv::handle_srv(args, &config).await,
    }
}


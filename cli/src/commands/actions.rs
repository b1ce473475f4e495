//! # Campus Assistant Quick Actions Command
//!
//! File: cli/src/commands/actions.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/campus-assistant
//!
//! ## Overview
//!
//! `campus actions` lists the preset quick-action queries, and
//! `campus actions --run <N|LABEL>` submits one of them. A run behaves exactly
//! like `campus ask` with the preset's query text.
//!
//! ## Examples
//!
//! ```bash
//! campus actions
//! campus actions --run 3
//! campus actions --run "Library Hours" --json
//! ```
//!
use super::ask;
use crate::assistant::{self, quick_actions};
use crate::common::ui;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use tracing::info;

/// # Actions Arguments (`ActionsArgs`)
#[derive(Parser, Debug)]
pub struct ActionsArgs {
    /// Submit the quick action with this number (1-based) or label.
    #[arg(long, value_name = "N|LABEL")]
    pub run: Option<String>,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// # Handle Actions Command (`handle_actions`)
///
/// ## Errors
///
/// Returns `CampusError::UnknownQuickAction` when `--run` names no preset.
pub async fn handle_actions(args: ActionsArgs) -> Result<()> {
    match args.run {
        Some(selector) => {
            let action = quick_actions::find(&selector)?;
            info!("Running quick action '{}'", action.label);
            let answer = assistant::campus_classifier().classify(action.query);
            if !args.json {
                println!("{} > {}", action.label, action.query);
            }
            println!("{}", ask::render(&answer, args.json)?);
        }
        None if args.json => {
            let json = serde_json::to_string_pretty(&quick_actions::QUICK_ACTIONS)
                .context("Failed to serialize quick actions")?;
            println!("{}", json);
        }
        None => {
            println!("Quick Actions:\n");
            print!("{}", ui::quick_action_table(&quick_actions::QUICK_ACTIONS));
            println!("\nUse 'campus actions --run <N>' or '/quick <N>' inside 'campus chat'.");
        }
    }
    Ok(())
}

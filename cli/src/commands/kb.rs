//! # Campus Assistant Knowledge Base Command
//!
//! File: cli/src/commands/kb.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/campus-assistant
//!
//! ## Overview
//!
//! `campus kb` prints the facts the assistant answers from, either all five
//! categories or a single one. `general` has no records and is rejected along
//! with unknown names.
//!
//! ## Examples
//!
//! ```bash
//! campus kb
//! campus kb dining
//! campus kb admin --json
//! ```
//!
//! Example output:
//!
//! ```text
//! Dining (3 entries)
//!   - Main Cafeteria (Student Union): 7:00 AM - 9:00 PM - All-you-can-eat
//!   - Coffee Corner (Library): 6:00 AM - 8:00 PM - Coffee & Snacks
//!   - Pizza Plaza (North Campus): 11:00 AM - 11:00 PM - Fast food
//! ```
//!
use crate::assistant::knowledge::Section;
use crate::assistant::{Category, KnowledgeBase};
use crate::core::error::{CampusError, Result};
use anyhow::Context;
use clap::Parser;
use tracing::info;

/// # Knowledge Base Arguments (`KbArgs`)
#[derive(Parser, Debug)]
pub struct KbArgs {
    /// Only show this category (schedules, facilities, dining, library, admin).
    pub category: Option<String>,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// # Handle Knowledge Base Command (`handle_kb`)
///
/// ## Errors
///
/// Returns `CampusError::UnknownCategory` for `general` or unrecognized names.
pub async fn handle_kb(args: KbArgs) -> Result<()> {
    let kb = KnowledgeBase::campus();

    match args.category {
        Some(name) => {
            let category: Category = name.parse()?;
            let section = kb
                .section(category)
                .ok_or(CampusError::UnknownCategory { name })?;
            info!("Showing knowledge base category {}", category);
            if args.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&section)
                        .context("Failed to serialize knowledge section")?
                );
            } else {
                print!("{}", render_section(category, &section));
            }
        }
        None if args.json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&kb).context("Failed to serialize knowledge base")?
            );
        }
        None => {
            for category in Category::KNOWLEDGE {
                if let Some(section) = kb.section(category) {
                    print!("{}", render_section(category, &section));
                    println!();
                }
            }
        }
    }
    Ok(())
}

fn render_section(category: Category, section: &Section<'_>) -> String {
    let lines = section.lines();
    let name = category.as_str();
    let mut title = name[..1].to_uppercase();
    title.push_str(&name[1..]);

    let mut out = format!("{} ({} entries)\n", title, lines.len());
    for line in lines {
        out.push_str(&format!("  - {}\n", line));
    }
    out
}

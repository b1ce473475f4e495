//! # Campus Assistant Ask Command
//!
//! File: cli/src/commands/ask.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/campus-assistant
//!
//! ## Overview
//!
//! `campus ask` answers a single question and exits. There is no typing delay
//! and no transcript; this is the classifier exposed directly on the command
//! line, handy for scripts and for checking which category a phrase lands in.
//!
//! ## Examples
//!
//! ```bash
//! campus ask What are the library hours?
//! # [library] The Main Library is open 7:00 AM - 11:00 PM ...
//!
//! campus ask --json gym and food
//! # { "response": "Our dining options include: ...", "category": "dining" }
//! ```
//!
use crate::assistant::{self, Classification};
use crate::common::ui;
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use tracing::info;

/// # Ask Arguments (`AskArgs`)
#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The question. Several words are joined with single spaces.
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Print the answer as a JSON object instead of text.
    #[arg(long)]
    pub json: bool,
}

/// # Handle Ask Command (`handle_ask`)
///
/// Classifies the joined query and prints the answer.
pub async fn handle_ask(args: AskArgs) -> Result<()> {
    let query = args.query.join(" ");
    info!("Handling ask command for query: {:?}", query);

    let classification = assistant::campus_classifier().classify(&query);
    println!("{}", render(&classification, args.json)?);
    Ok(())
}

/// Text (`[category] response`) or pretty JSON rendering of an answer.
pub fn render(classification: &Classification, json: bool) -> Result<String> {
    if json {
        serde_json::to_string_pretty(classification).context("Failed to serialize answer")
    } else {
        Ok(format!(
            "{} {}",
            ui::badge(classification.category),
            classification.response
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::Category;

    #[test]
    fn test_parses_multiple_words() {
        let args = AskArgs::try_parse_from(["ask", "where", "can", "I", "get", "food"]).unwrap();
        assert_eq!(args.query.join(" "), "where can I get food");
        assert!(!args.json);
    }

    #[test]
    fn test_requires_query() {
        assert!(AskArgs::try_parse_from(["ask"]).is_err());
    }

    #[test]
    fn test_render_text() {
        let answer = Classification {
            response: "Hello there.".into(),
            category: Category::General,
        };
        assert_eq!(render(&answer, false).unwrap(), "[general] Hello there.");
    }

    #[test]
    fn test_render_json() {
        let answer = assistant::campus_classifier().classify("I need the registrar");
        let value: serde_json::Value =
            serde_json::from_str(&render(&answer, true).unwrap()).unwrap();
        assert_eq!(value["category"], "admin");
        assert!(value["response"]
            .as_str()
            .unwrap()
            .contains("Registrar (Room 101)"));
    }
}

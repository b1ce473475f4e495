//! # Campus Assistant UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/campus-assistant
//!
//! ## Overview
//!
//! Plain-text rendering shared by the `chat`, `ask`, `actions` and `kb`
//! commands. Functions here return `String`s instead of printing so the chat
//! loop can write to any `AsyncWrite` and tests can compare output directly.
//!
//! ## Layout
//!
//! ```text
//! [14:05] You: where can I get food
//! [14:05] Smart Campus Assistant [dining]: Our dining options include: ...
//! ```
//!
use crate::assistant::conversation::{Message, Role};
use crate::assistant::quick_actions::QuickAction;
use crate::assistant::Category;

/// Category badge, e.g. `[library]`.
pub fn badge(category: Category) -> String {
    format!("[{}]", category)
}

/// One transcript line for `message`.
pub fn format_message(message: &Message, assistant_name: &str) -> String {
    match (message.role, message.category) {
        (Role::User, _) => format!("[{}] You: {}", message.time_label(), message.content),
        (Role::Assistant, Some(category)) => format!(
            "[{}] {} {}: {}",
            message.time_label(),
            assistant_name,
            badge(category),
            message.content
        ),
        (Role::Assistant, None) => format!(
            "[{}] {}: {}",
            message.time_label(),
            assistant_name,
            message.content
        ),
    }
}

pub fn typing_indicator(assistant_name: &str) -> String {
    format!("{} is typing...", assistant_name)
}

/// Numbered table of quick actions.
pub fn quick_action_table(actions: &[QuickAction]) -> String {
    let width = actions
        .iter()
        .map(|a| a.label.len())
        .max()
        .unwrap_or(0)
        .max("Action".len());

    let mut out = String::new();
    out.push_str(&format!("  # | {:<width$} | Query\n", "Action", width = width));
    out.push_str(&format!("----+-{}-+-{}\n", "-".repeat(width), "-".repeat(30)));
    for (i, action) in actions.iter().enumerate() {
        out.push_str(&format!(
            "{:>3} | {:<width$} | {}\n",
            i + 1,
            action.label,
            action.query,
            width = width
        ));
    }
    out
}

//! # Quick Actions
//!
//! File: cli/src/assistant/quick_actions.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/campus-assistant
//!
//! Preset one-click queries. Running a quick action submits its query exactly
//! as if the user had typed it; the classifier does not know the difference.
//!
//! Actions can be selected by 1-based position (`3`) or by label, ignoring
//! case (`dining options`).
//!
use crate::core::error::CampusError;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickAction {
    pub label: &'static str,
    pub query: &'static str,
}

pub static QUICK_ACTIONS: [QuickAction; 6] = [
    QuickAction {
        label: "Class Schedules",
        query: "show me class schedules",
    },
    QuickAction {
        label: "Library Hours",
        query: "library hours and services",
    },
    QuickAction {
        label: "Dining Options",
        query: "campus dining options",
    },
    QuickAction {
        label: "Facilities",
        query: "campus facilities",
    },
    QuickAction {
        label: "Admin Offices",
        query: "administrative offices",
    },
    QuickAction {
        label: "Contact Info",
        query: "contact information",
    },
];

/// Resolves a selector (position or label) to a quick action.
pub fn find(selector: &str) -> Result<&'static QuickAction, CampusError> {
    let trimmed = selector.trim();
    let by_index = trimmed
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| QUICK_ACTIONS.get(i));

    by_index
        .or_else(|| {
            QUICK_ACTIONS
                .iter()
                .find(|a| a.label.eq_ignore_ascii_case(trimmed))
        })
        .ok_or_else(|| CampusError::UnknownQuickAction {
            selector: trimmed.to_string(),
            available: QUICK_ACTIONS.len(),
        })
}

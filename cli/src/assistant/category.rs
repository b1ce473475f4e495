//! # Query Categories
//!
//! File: cli/src/assistant/category.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/campus-assistant
//!
//! The six labels a classified query can carry. Five of them name a section of
//! the knowledge base; `General` marks the help-topics fallback.
//!
use crate::core::error::CampusError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Schedules,
    Library,
    Dining,
    Facilities,
    Admin,
    General,
}

impl Category {
    /// The five categories backed by knowledge base records, in display order.
    pub const KNOWLEDGE: [Category; 5] = [
        Category::Schedules,
        Category::Facilities,
        Category::Dining,
        Category::Library,
        Category::Admin,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Schedules => "schedules",
            Category::Library => "library",
            Category::Dining => "dining",
            Category::Facilities => "facilities",
            Category::Admin => "admin",
            Category::General => "general",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "schedules" => Ok(Category::Schedules),
            "library" => Ok(Category::Library),
            "dining" => Ok(Category::Dining),
            "facilities" => Ok(Category::Facilities),
            "admin" => Ok(Category::Admin),
            "general" => Ok(Category::General),
            _ => Err(CampusError::UnknownCategory {
                name: s.to_string(),
            }),
        }
    }
}

//! # Campus Assistant Domain
//!
//! File: cli/src/assistant/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/campus-assistant
//!
//! ## Overview
//!
//! Everything the assistant knows and how it answers, independent of any
//! command-line or HTTP surface:
//!
//! - `category`: the six labels attached to answers
//! - `knowledge`: the immutable campus fact table
//! - `classifier`: ordered keyword rules mapping a query to an answer
//! - `conversation`: the in-memory transcript of an interactive session
//! - `quick_actions`: preset queries offered as shortcuts
//!
//! Commands build one `KnowledgeBase`, wrap it in an `Arc` and share it with a
//! `Classifier`; nothing in this module mutates it.
//!
pub mod category;
pub mod classifier;
pub mod conversation;
pub mod knowledge;
pub mod quick_actions;

pub use category::Category;
pub use classifier::{Classification, Classifier};
pub use knowledge::KnowledgeBase;

use std::sync::Arc;

/// Classifier over the built-in campus data.
pub fn campus_classifier() -> Classifier {
    Classifier::new(Arc::new(KnowledgeBase::campus()))
}

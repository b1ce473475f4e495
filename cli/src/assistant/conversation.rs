//! # Conversation Transcript
//!
//! File: cli/src/assistant/conversation.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/campus-assistant
//!
//! ## Overview
//!
//! Holds the running exchange shown in an interactive session: a greeting,
//! then alternating user and assistant messages. The transcript exists only
//! for display. It is never fed back into classification and is dropped when
//! the session ends.
//!
//! ## Flow
//!
//! `record` ignores blank input and otherwise appends the user message, so a
//! front end can echo it right away. `respond` then waits the configured
//! typing delay, classifies that message and appends the reply with its
//! category.
//!
use super::category::Category;
use super::classifier::Classifier;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub id: u64,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Local>,
    /// Set on assistant messages only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl Message {
    /// Wall-clock label shown next to each message, e.g. `14:05`.
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

/// Greeting that opens every session.
pub fn welcome_message(assistant_name: &str) -> String {
    format!(
        "Hi! I'm your {}. I can help you with schedules, facilities, dining, library services, and administrative procedures. What would you like to know?",
        assistant_name
    )
}

pub struct Conversation {
    classifier: Classifier,
    typing_delay: Duration,
    messages: Vec<Message>,
    next_id: u64,
}

impl Conversation {
    /// Starts a session seeded with the greeting.
    pub fn new(classifier: Classifier, assistant_name: &str, typing_delay: Duration) -> Self {
        let mut conversation = Self {
            classifier,
            typing_delay,
            messages: Vec::new(),
            next_id: 1,
        };
        conversation.push(
            Role::Assistant,
            welcome_message(assistant_name),
            Some(Category::General),
        );
        conversation
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn typing_delay(&self) -> Duration {
        self.typing_delay
    }

    fn push(&mut self, role: Role, content: String, category: Option<Category>) -> &Message {
        let id = self.next_id;
        self.next_id += 1;
        trace!("Appending message #{} ({:?})", id, role);
        self.messages.push(Message {
            id,
            role,
            content,
            timestamp: Local::now(),
            category,
        });
        &self.messages[self.messages.len() - 1]
    }

    /// # Record Input (`record`)
    ///
    /// Appends `input` as a user message and returns it, or `None` when
    /// `input` is blank and nothing was recorded.
    pub fn record(&mut self, input: &str) -> Option<&Message> {
        if input.trim().is_empty() {
            debug!("Ignoring blank input");
            return None;
        }
        Some(self.push(Role::User, input.to_string(), None))
    }

    /// # Respond (`respond`)
    ///
    /// Waits the typing delay, classifies the latest user message and appends
    /// the reply. Returns `None` when the transcript does not end with an
    /// unanswered user message.
    pub async fn respond(&mut self) -> Option<&Message> {
        let query = match self.messages.last() {
            Some(last) if last.role == Role::User => last.content.clone(),
            _ => return None,
        };

        if !self.typing_delay.is_zero() {
            tokio::time::sleep(self.typing_delay).await;
        }

        let classification = self.classifier.classify(&query);
        Some(self.push(
            Role::Assistant,
            classification.response,
            Some(classification.category),
        ))
    }
}

//! # Query Classifier
//!
//! File: cli/src/assistant/classifier.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/campus-assistant
//!
//! ## Overview
//!
//! Maps free-text input to a canned answer and a category label. Matching is a
//! case-insensitive substring test against keyword lists; there is no
//! tokenization, so "classy" still counts as a schedule question.
//!
//! ## Architecture
//!
//! `RULES` is an ordered table of `(category, keywords, responder)` entries.
//! The first rule with any keyword contained in the lowercased query wins, and
//! a query that matches nothing falls through to `General`. The table order is
//! the priority order:
//!
//! schedules > library > dining > facilities > admin > general
//!
//! so "gym and food" is a dining question. Classification reads only the query
//! and the shared `KnowledgeBase`, which makes it pure and total.
//!
//! ## Examples
//!
//! ```rust
//! let classifier = Classifier::new(Arc::new(KnowledgeBase::campus()));
//! let result = classifier.classify("What are the library hours?");
//! assert_eq!(result.category, Category::Library);
//! ```
//!
use super::category::Category;
use super::knowledge::KnowledgeBase;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

pub const LIBRARY_RESPONSE: &str = "The Main Library is open 7:00 AM - 11:00 PM and offers study rooms (available 24/7 with online reservation), computer lab access with student ID, and book checkout services. How can I help you with library services?";

pub const DINING_RESPONSE: &str = "Our dining options include: Main Cafeteria (7 AM-9 PM, all-you-can-eat), Coffee Corner in the library (6 AM-8 PM), and Pizza Plaza on North Campus (11 AM-11 PM). What type of food are you looking for?";

pub const FACILITIES_RESPONSE: &str = "The Recreation Center on North Campus is open 5:00 AM - 11:00 PM and includes a gym, pool, and basketball courts. The Student Union (6 AM-12 AM) has the food court, bookstore, and meeting rooms. Need directions to any facilities?";

pub const ADMIN_RESPONSE: &str = "Administrative offices are in the Admin Building: Registrar (Room 101) for transcripts and enrollment, Financial Aid (Room 205) for scholarships and loans, and Student Services (Student Union 150) for counseling and career services. All open 8 AM-5 PM. Which office do you need?";

/// Reply used when no keyword matches.
pub const GENERAL_RESPONSE: &str = "I can help you with campus information including class schedules, facilities, dining options, library services, and administrative procedures. What would you like to know about?";

/// One entry of the keyword dispatch table.
pub struct Rule {
    pub category: Category,
    /// Lowercase substrings; any one of them selects this rule.
    pub keywords: &'static [&'static str],
    respond: fn(&KnowledgeBase) -> String,
}

impl Rule {
    pub fn matches(&self, lowered_query: &str) -> bool {
        self.keywords.iter().any(|kw| lowered_query.contains(kw))
    }
}

/// Keyword rules in priority order.
pub static RULES: [Rule; 5] = [
    Rule {
        category: Category::Schedules,
        keywords: &["schedule", "class", "course"],
        respond: schedule_response,
    },
    Rule {
        category: Category::Library,
        keywords: &["library"],
        respond: library_response,
    },
    Rule {
        category: Category::Dining,
        keywords: &["dining", "food", "cafe"],
        respond: dining_response,
    },
    Rule {
        category: Category::Facilities,
        keywords: &["facility", "gym", "recreation"],
        respond: facilities_response,
    },
    Rule {
        category: Category::Admin,
        keywords: &["admin", "office", "registrar", "financial aid"],
        respond: admin_response,
    },
];

fn schedule_response(kb: &KnowledgeBase) -> String {
    match kb.schedules().first() {
        Some(s) => format!(
            "Here's some schedule information: {} meets {} from {} in {}. Would you like information about other classes?",
            s.name, s.days, s.time, s.location
        ),
        None => GENERAL_RESPONSE.to_string(),
    }
}

fn library_response(_: &KnowledgeBase) -> String {
    LIBRARY_RESPONSE.to_string()
}

fn dining_response(_: &KnowledgeBase) -> String {
    DINING_RESPONSE.to_string()
}

fn facilities_response(_: &KnowledgeBase) -> String {
    FACILITIES_RESPONSE.to_string()
}

fn admin_response(_: &KnowledgeBase) -> String {
    ADMIN_RESPONSE.to_string()
}

/// Returns the first rule whose keywords occur in `query`, ignoring case.
pub fn match_rule(query: &str) -> Option<&'static Rule> {
    let lowered = query.to_lowercase();
    RULES.iter().find(|rule| rule.matches(&lowered))
}

/// The answer for a single query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub response: String,
    pub category: Category,
}

/// Classifier bound to a shared, read-only knowledge base.
#[derive(Debug, Clone)]
pub struct Classifier {
    knowledge: Arc<KnowledgeBase>,
}

impl Classifier {
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self { knowledge }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// # Classify Query (`classify`)
    ///
    /// Picks the response for `query`. Never fails: empty or unmatched input
    /// yields the `General` help text.
    pub fn classify(&self, query: &str) -> Classification {
        let classification = match match_rule(query) {
            Some(rule) => Classification {
                response: (rule.respond)(&self.knowledge),
                category: rule.category,
            },
            None => Classification {
                response: GENERAL_RESPONSE.to_string(),
                category: Category::General,
            },
        };
        debug!(
            "Classified query {:?} as {}",
            query, classification.category
        );
        classification
    }
}

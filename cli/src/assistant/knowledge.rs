//! # Campus Knowledge Base
//!
//! File: cli/src/assistant/knowledge.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/campus-assistant
//!
//! ## Overview
//!
//! The fixed set of campus facts the assistant answers from. Each category has
//! its own record type; there is no shared schema between them.
//!
//! ## Architecture
//!
//! `KnowledgeBase::campus()` builds the table once at startup. Callers wrap it
//! in an `Arc` and hand it to the classifier and the HTTP state; nothing ever
//! mutates it afterwards, so the type exposes read-only accessors only.
//!
//! `Section` borrows one category's records so the `kb` command and the API
//! can render or serialize a single slice without cloning.
//!
use super::category::Category;
use serde::Serialize;

/// A recurring class meeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassSchedule {
    pub name: String,
    pub time: String,
    pub location: String,
    pub days: String,
}

/// A campus building with public opening hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Facility {
    pub name: String,
    pub hours: String,
    pub location: String,
    pub services: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiningVenue {
    pub name: String,
    pub hours: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// A service desk inside the library. Some services carry an extra condition
/// such as a booking or ID requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryService {
    pub service: String,
    pub hours: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirement: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminOffice {
    pub office: String,
    pub hours: String,
    pub location: String,
    pub services: Vec<String>,
}

/// Immutable table of campus facts grouped by category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KnowledgeBase {
    schedules: Vec<ClassSchedule>,
    facilities: Vec<Facility>,
    dining: Vec<DiningVenue>,
    library: Vec<LibraryService>,
    admin: Vec<AdminOffice>,
}

/// Borrowed view of one category's records.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(untagged)]
pub enum Section<'a> {
    Schedules(&'a [ClassSchedule]),
    Facilities(&'a [Facility]),
    Dining(&'a [DiningVenue]),
    Library(&'a [LibraryService]),
    Admin(&'a [AdminOffice]),
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl KnowledgeBase {
    /// The built-in campus data set.
    pub fn campus() -> Self {
        Self {
            schedules: vec![
                ClassSchedule {
                    name: "Computer Science 101".into(),
                    time: "9:00 AM - 10:30 AM".into(),
                    location: "Room 204".into(),
                    days: "Mon, Wed, Fri".into(),
                },
                ClassSchedule {
                    name: "Mathematics 201".into(),
                    time: "2:00 PM - 3:30 PM".into(),
                    location: "Room 301".into(),
                    days: "Tue, Thu".into(),
                },
                ClassSchedule {
                    name: "Physics Lab".into(),
                    time: "10:00 AM - 12:00 PM".into(),
                    location: "Lab Building".into(),
                    days: "Wednesday".into(),
                },
            ],
            facilities: vec![
                Facility {
                    name: "Main Library".into(),
                    hours: "7:00 AM - 11:00 PM".into(),
                    location: "Central Campus".into(),
                    services: strings(&["Study rooms", "Computer lab", "Printing"]),
                },
                Facility {
                    name: "Recreation Center".into(),
                    hours: "5:00 AM - 11:00 PM".into(),
                    location: "North Campus".into(),
                    services: strings(&["Gym", "Pool", "Basketball courts"]),
                },
                Facility {
                    name: "Student Union".into(),
                    hours: "6:00 AM - 12:00 AM".into(),
                    location: "Main Campus".into(),
                    services: strings(&["Food court", "Bookstore", "Meeting rooms"]),
                },
            ],
            dining: vec![
                DiningVenue {
                    name: "Main Cafeteria".into(),
                    hours: "7:00 AM - 9:00 PM".into(),
                    location: "Student Union".into(),
                    kind: "All-you-can-eat".into(),
                },
                DiningVenue {
                    name: "Coffee Corner".into(),
                    hours: "6:00 AM - 8:00 PM".into(),
                    location: "Library".into(),
                    kind: "Coffee & Snacks".into(),
                },
                DiningVenue {
                    name: "Pizza Plaza".into(),
                    hours: "11:00 AM - 11:00 PM".into(),
                    location: "North Campus".into(),
                    kind: "Fast food".into(),
                },
            ],
            library: vec![
                LibraryService {
                    service: "Book checkout".into(),
                    hours: "7:00 AM - 10:00 PM".into(),
                    location: "Main desk".into(),
                    requirement: None,
                },
                LibraryService {
                    service: "Study rooms".into(),
                    hours: "24/7".into(),
                    location: "2nd & 3rd floors".into(),
                    requirement: Some("Online reservation required".into()),
                },
                LibraryService {
                    service: "Computer lab".into(),
                    hours: "7:00 AM - 11:00 PM".into(),
                    location: "1st floor".into(),
                    requirement: Some("Student ID required".into()),
                },
            ],
            admin: vec![
                AdminOffice {
                    office: "Registrar".into(),
                    hours: "8:00 AM - 5:00 PM".into(),
                    location: "Admin Building 101".into(),
                    services: strings(&["Transcripts", "Enrollment", "Records"]),
                },
                AdminOffice {
                    office: "Financial Aid".into(),
                    hours: "8:00 AM - 5:00 PM".into(),
                    location: "Admin Building 205".into(),
                    services: strings(&["Scholarships", "Loans", "Work-study"]),
                },
                AdminOffice {
                    office: "Student Services".into(),
                    hours: "8:00 AM - 6:00 PM".into(),
                    location: "Student Union 150".into(),
                    services: strings(&["Counseling", "Career services", "Health center"]),
                },
            ],
        }
    }

    pub fn schedules(&self) -> &[ClassSchedule] {
        &self.schedules
    }

    /// Returns the records for `category`, or `None` for `General`, which has no data.
    pub fn section(&self, category: Category) -> Option<Section<'_>> {
        match category {
            Category::Schedules => Some(Section::Schedules(&self.schedules)),
            Category::Facilities => Some(Section::Facilities(&self.facilities)),
            Category::Dining => Some(Section::Dining(&self.dining)),
            Category::Library => Some(Section::Library(&self.library)),
            Category::Admin => Some(Section::Admin(&self.admin)),
            Category::General => None,
        }
    }
}

impl Section<'_> {
    /// One human-readable line per record.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Section::Schedules(items) => items
                .iter()
                .map(|s| format!("{}: {}, {} in {}", s.name, s.days, s.time, s.location))
                .collect(),
            Section::Facilities(items) => items
                .iter()
                .map(|f| {
                    format!(
                        "{} ({}): {} - {}",
                        f.name,
                        f.location,
                        f.hours,
                        f.services.join(", ")
                    )
                })
                .collect(),
            Section::Dining(items) => items
                .iter()
                .map(|d| format!("{} ({}): {} - {}", d.name, d.location, d.hours, d.kind))
                .collect(),
            Section::Library(items) => items
                .iter()
                .map(|l| match &l.requirement {
                    Some(req) => format!("{} ({}): {} - {}", l.service, l.location, l.hours, req),
                    None => format!("{} ({}): {}", l.service, l.location, l.hours),
                })
                .collect(),
            Section::Admin(items) => items
                .iter()
                .map(|a| {
                    format!(
                        "{} ({}): {} - {}",
                        a.office,
                        a.location,
                        a.hours,
                        a.services.join(", ")
                    )
                })
                .collect(),
        }
    }
}

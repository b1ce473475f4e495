//! # Campus Assistant CLI Ask Integration Tests
//!
//! File: cli/tests/ask.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/campus-assistant
//!
//! ## Overview
//!
//! Runs `campus ask` end to end and checks the category badge and answer for
//! each kind of question, including priority between overlapping keywords.
//!

mod common;
use common::*;
use predicates::prelude::*;

fn ask(query: &[&str]) -> assert_cmd::assert::Assert {
    let (mut cmd, _dir) = campus_cmd();
    cmd.arg("ask").args(query).assert()
}

#[test]
fn test_ask_library_hours() {
    ask(&["What", "are", "the", "library", "hours?"])
        .success()
        .stdout(predicate::str::starts_with(
            "[library] The Main Library is open 7:00 AM - 11:00 PM",
        ));
}

#[test]
fn test_ask_schedule_uses_first_class() {
    ask(&["When", "is", "my", "class?"])
        .success()
        .stdout(predicate::str::contains(
            "[schedules] Here's some schedule information: Computer Science 101 meets Mon, Wed, Fri from 9:00 AM - 10:30 AM in Room 204.",
        ));
}

#[test]
fn test_ask_dining() {
    ask(&["where", "can", "I", "get", "FOOD"])
        .success()
        .stdout(predicate::str::starts_with("[dining] Our dining options include:"));
}

#[test]
fn test_ask_facilities() {
    ask(&["Is", "the", "gym", "open?"])
        .success()
        .stdout(predicate::str::starts_with(
            "[facilities] The Recreation Center on North Campus",
        ));
}

#[test]
fn test_ask_admin() {
    ask(&["I", "need", "the", "registrar"])
        .success()
        .stdout(predicate::str::starts_with(
            "[admin] Administrative offices are in the Admin Building",
        ));
}

#[test]
fn test_ask_general_fallback() {
    ask(&["hello", "there"])
        .success()
        .stdout(predicate::str::starts_with(
            "[general] I can help you with campus information",
        ));
}

#[test]
fn test_ask_priority_dining_over_facilities() {
    ask(&["gym", "and", "food"])
        .success()
        .stdout(predicate::str::starts_with("[dining]"));
}

#[test]
fn test_ask_priority_schedules_over_library() {
    ask(&["library", "class"])
        .success()
        .stdout(predicate::str::starts_with("[schedules]"));
}

#[test]
fn test_ask_json() {
    let (mut cmd, _dir) = campus_cmd();
    let output = cmd
        .args(["ask", "--json", "financial", "aid", "deadlines"])
        .output()
        .expect("Failed to run campus ask");
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("ask --json did not print JSON");
    assert_eq!(json["category"], "admin");
    assert!(json["response"]
        .as_str()
        .unwrap()
        .contains("Financial Aid (Room 205)"));
}

#[test]
fn test_ask_requires_query() {
    let (mut cmd, _dir) = campus_cmd();
    cmd.arg("ask").assert().failure();
}

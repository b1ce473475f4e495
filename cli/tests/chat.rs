//! # Campus Assistant CLI Chat Integration Tests
//!
//! File: cli/tests/chat.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/campus-assistant
//!
//! ## Overview
//!
//! Drives `campus chat` through piped stdin. All tests pass `--delay-ms 0` so
//! no typing delay slows the suite down.
//!

mod common;
use common::*;
use predicates::prelude::*;

fn chat(input: &str) -> assert_cmd::assert::Assert {
    let (mut cmd, _dir) = campus_cmd();
    cmd.args(["chat", "--delay-ms", "0"]).write_stdin(input).assert()
}

#[test]
fn test_chat_greets_and_answers() {
    chat("Where is the library?\nbye\n")
        .success()
        .stdout(predicate::str::contains("=== Smart Campus Assistant ==="))
        .stdout(predicate::str::contains(
            "Hi! I'm your Smart Campus Assistant. I can help you with schedules",
        ))
        .stdout(predicate::str::contains("You: Where is the library?"))
        .stdout(predicate::str::contains("Smart Campus Assistant [library]:"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_chat_messages_carry_timestamps() {
    chat("food\n")
        .success()
        .stdout(predicate::str::is_match(r"\[\d{2}:\d{2}\] You: food").unwrap());
}

#[test]
fn test_chat_quick_action() {
    chat("/quick Dining Options\n")
        .success()
        .stdout(predicate::str::contains("(Dining Options) campus dining options"))
        .stdout(predicate::str::contains("[dining]:"));
}

#[test]
fn test_chat_lists_actions_and_help() {
    chat("/actions\n/help\nquit\n")
        .success()
        .stdout(predicate::str::contains("Admin Offices"))
        .stdout(predicate::str::contains("/quick <N|LABEL>"));
}

#[test]
fn test_chat_without_typing_delay_has_no_indicator() {
    chat("gym\n")
        .success()
        .stdout(predicate::str::contains("is typing...").not());
}

#[test]
fn test_chat_rejects_excessive_delay() {
    let (mut cmd, _dir) = campus_cmd();
    cmd.args(["chat", "--delay-ms", "600000"])
        .write_stdin("bye\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--delay-ms"));
}

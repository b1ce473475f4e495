//! # Campus Assistant Chat Command
//!
//! File: cli/src/commands/chat.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/campus-assistant
//!
//! ## Overview
//!
//! `campus chat` runs an interactive session on stdin/stdout. Each line is a
//! query; the assistant shows a typing indicator, waits the configured delay
//! and prints its answer tagged with a category badge and a timestamp.
//!
//! ## Session Commands
//!
//! - `/actions`: list the quick actions
//! - `/quick <N|LABEL>`: submit a quick action's query
//! - `/help`: list these commands
//! - `bye`, `exit`, `quit` (or end of input): leave the session
//!
//! Blank lines are ignored.
//!
//! ## Architecture
//!
//! `run_session` is generic over the reader and writer so tests can drive a
//! whole session from an in-memory buffer. The handler only wires it to the
//! process's stdin and stdout.
//!
use crate::assistant::conversation::Conversation;
use crate::assistant::{self, quick_actions};
use crate::common::ui;
use crate::core::config::{Config, MAX_TYPING_DELAY_MS};
use crate::core::error::{CampusError, Result};
use anyhow::{anyhow, Context};
use clap::Parser;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

const HELP_TEXT: &str = "Commands:
  /actions          list quick actions
  /quick <N|LABEL>  ask a quick action's question
  /help             show this help
  bye | exit | quit leave the chat";

/// # Chat Arguments (`ChatArgs`)
#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Typing delay before each answer in milliseconds (overrides the configured value).
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,
}

/// A parsed line of session input.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Exit,
    Help,
    Actions,
    Quick(&'a str),
    Query(&'a str),
    Blank,
}

fn parse_input(line: &str) -> Input<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Input::Blank;
    }
    if ["bye", "exit", "quit"]
        .iter()
        .any(|word| trimmed.eq_ignore_ascii_case(word))
    {
        return Input::Exit;
    }
    match trimmed.split_once(char::is_whitespace) {
        Some(("/quick", rest)) => Input::Quick(rest.trim()),
        _ => match trimmed {
            "/help" => Input::Help,
            "/actions" => Input::Actions,
            "/quick" => Input::Quick(""),
            _ => Input::Query(line),
        },
    }
}

/// # Handle Chat Command (`handle_chat`)
///
/// Starts a session on the terminal using the configured assistant name and
/// typing delay (or `--delay-ms`).
///
/// ## Errors
///
/// Fails if `--delay-ms` exceeds the allowed maximum or if stdin/stdout fail.
pub async fn handle_chat(args: ChatArgs, config: &Config) -> Result<()> {
    let typing_delay = match args.delay_ms {
        Some(ms) if ms > MAX_TYPING_DELAY_MS => {
            return Err(anyhow!(CampusError::Config(format!(
                "--delay-ms is {} but must be at most {}.",
                ms, MAX_TYPING_DELAY_MS
            ))));
        }
        Some(ms) => Duration::from_millis(ms),
        None => config.assistant.typing_delay(),
    };
    info!(
        "Starting chat session as '{}' with {:?} typing delay",
        config.assistant.name, typing_delay
    );

    let conversation = Conversation::new(
        assistant::campus_classifier(),
        &config.assistant.name,
        typing_delay,
    );
    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    run_session(conversation, &config.assistant.name, stdin, stdout).await
}

async fn write_line<W: AsyncWrite + Unpin>(writer: &mut W, text: &str) -> Result<()> {
    writer
        .write_all(format!("{}\n", text).as_bytes())
        .await
        .context("Failed to write to output")?;
    Ok(())
}

/// # Run Session (`run_session`)
///
/// Drives one conversation until an exit word or end of input.
pub async fn run_session<R, W>(
    mut conversation: Conversation,
    assistant_name: &str,
    reader: R,
    mut writer: W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    write_line(&mut writer, &format!("=== {} ===", assistant_name)).await?;
    if let Some(greeting) = conversation.messages().first() {
        write_line(&mut writer, &ui::format_message(greeting, assistant_name)).await?;
    }
    write_line(&mut writer, "Type /help for commands or 'bye' to quit.\n").await?;

    let mut lines = reader.lines();
    loop {
        writer.write_all(b"> ").await?;
        writer.flush().await?;

        let line = match lines.next_line().await.context("Failed to read input")? {
            Some(line) => line,
            None => {
                debug!("End of input, closing session");
                break;
            }
        };

        let query = match parse_input(&line) {
            Input::Blank => continue,
            Input::Exit => break,
            Input::Help => {
                write_line(&mut writer, HELP_TEXT).await?;
                continue;
            }
            Input::Actions => {
                writer
                    .write_all(ui::quick_action_table(&quick_actions::QUICK_ACTIONS).as_bytes())
                    .await?;
                continue;
            }
            Input::Quick(selector) => match quick_actions::find(selector) {
                Ok(action) => {
                    write_line(
                        &mut writer,
                        &format!("({}) {}", action.label, action.query),
                    )
                    .await?;
                    action.query
                }
                Err(e) => {
                    warn!("Quick action lookup failed: {}", e);
                    write_line(&mut writer, &e.to_string()).await?;
                    continue;
                }
            },
            Input::Query(text) => text,
        };

        let Some(recorded) = conversation.record(query) else {
            continue;
        };
        let echoed = ui::format_message(recorded, assistant_name);
        write_line(&mut writer, &echoed).await?;

        if !conversation.typing_delay().is_zero() {
            write_line(&mut writer, &ui::typing_indicator(assistant_name)).await?;
            writer.flush().await?;
        }
        if let Some(reply) = conversation.respond().await {
            let rendered = ui::format_message(reply, assistant_name);
            write_line(&mut writer, &rendered).await?;
        }
    }

    write_line(&mut writer, "\nGoodbye!").await?;
    writer.flush().await?;
    info!(
        "Chat session ended after {} messages",
        conversation.messages().len()
    );
    Ok(())
}

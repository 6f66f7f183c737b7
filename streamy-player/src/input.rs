//! Line-oriented remote control for the headless binary.
//!
//! Each line on stdin is one button press (`left`, `select`, `jump 2`, ...).

use streamy_model::prelude::SectionKey;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::UnboundedSender;

use crate::domains::carousel::Direction;
use crate::domains::home::{Message, SpotlightMessage};
use crate::infra::timer::ScopedTask;

#[derive(Debug, Clone)]
pub enum Command {
    Send(Message),
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("`{command}` needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("`{0}` is not a valid index")]
    InvalidIndex(String),
}

fn parse_index(raw: Option<&str>, command: &'static str) -> Result<usize, CommandError> {
    let raw = raw.ok_or(CommandError::MissingArgument {
        command,
        expected: "an index",
    })?;
    raw.parse()
        .map_err(|_| CommandError::InvalidIndex(raw.to_string()))
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };

    let message = match head.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => return Ok(Some(Command::Quit)),
        "h" | "left" => Message::MoveFocus(Direction::Left),
        "l" | "right" => Message::MoveFocus(Direction::Right),
        "k" | "up" => Message::MoveFocus(Direction::Up),
        "j" | "down" => Message::MoveFocus(Direction::Down),
        "ok" | "enter" | "select" => Message::Select,
        "play" => Message::PlayPressed,
        "info" => Message::InfoPressed,
        "spotlight" => Message::SpotlightPressed,
        "search" => Message::SearchPressed,
        "profile" => Message::ProfilePressed,
        "retry" | "reload" => Message::RetryLoad,
        "cancel" | "dismiss" => Message::DismissError,
        "jump" => Message::Spotlight(SpotlightMessage::JumpTo(parse_index(
            words.next(),
            "jump",
        )?)),
        "focus" => {
            let section = words.next().ok_or(CommandError::MissingArgument {
                command: "focus",
                expected: "a section key and an index",
            })?;
            let index = parse_index(words.next(), "focus")?;
            Message::ItemFocused {
                section: SectionKey::new(section),
                index,
            }
        }
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(Command::Send(message)))
}

/// Forward stdin commands to the screen until EOF or `quit`.
pub fn spawn_stdin_reader(sender: UnboundedSender<Message>) -> ScopedTask {
    ScopedTask::spawn("stdin-remote", async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(err) => {
                    log::warn!("[Remote] stdin closed: {}", err);
                    break;
                }
            };
            let message = match parse_command(&line) {
                Ok(Some(Command::Send(message))) => message,
                Ok(Some(Command::Quit)) => Message::Teardown,
                Ok(None) => continue,
                Err(err) => {
                    log::warn!("[Remote] {}", err);
                    continue;
                }
            };
            let quitting = matches!(message, Message::Teardown);
            if sender.send(message).is_err() || quitting {
                break;
            }
        }
    })
}

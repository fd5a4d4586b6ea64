//! Operator input: the startup user-id prompt and the keystroke
//! listener task.
//!
//! The listener runs for the lifetime of the process and talks to the
//! dispatch loop exclusively through the control channel. Commands are
//! one key plus Enter: `s` sends one order, `a` toggles auto-generation,
//! `q` quits. Anything else is ignored silently.

use std::num::ParseIntError;

use tokio::io::{self, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::dispatch::Command;

/// Maps one input line to a command, keyed on its first character.
pub fn parse_command(line: &str) -> Option<Command> {
    match line.trim().chars().next()?.to_ascii_lowercase() {
        's' => Some(Command::SendOne),
        'a' => Some(Command::ToggleAuto),
        'q' => Some(Command::Quit),
        _ => None,
    }
}

/// Parses the user-id prompt answer. Blank means "random per order".
pub fn parse_user_id(line: &str) -> Result<Option<u32>, ParseIntError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse::<u32>().map(Some)
}

/// Prompts until the operator gives a valid answer (or stdin closes,
/// which falls back to random user ids).
pub async fn prompt_user_id() -> Option<u32> {
    let mut lines = BufReader::new(io::stdin()).lines();
    loop {
        println!("User id for generated orders (blank = random per order):");
        match lines.next_line().await {
            Ok(Some(line)) => match parse_user_id(&line) {
                Ok(choice) => return choice,
                Err(_) => {
                    println!("'{}' is not a number. Enter digits or leave blank.", line.trim());
                }
            },
            Ok(None) => return None,
            Err(e) => {
                warn!(error = %e, "stdin read failed");
                return None;
            }
        }
    }
}

/// Spawns the keystroke listener.
///
/// The task ends on a quit command, a closed channel, or stdin EOF; in
/// every case the dropped sender lets the dispatch loop observe the
/// shutdown.
pub fn spawn(commands: mpsc::Sender<Command>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut lines = BufReader::new(io::stdin()).lines();
        debug!("input listener started");
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    let Some(command) = parse_command(&line) else {
                        continue;
                    };
                    debug!(?command, "operator command");
                    let quit = command == Command::Quit;
                    if commands.send(command).await.is_err() || quit {
                        break;
                    }
                }
                Ok(None) => {
                    debug!("stdin closed");
                    break;
                }
                Err(e) => {
                    warn!(error = %e, "stdin read failed");
                    break;
                }
            }
        }
    })
}

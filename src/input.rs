//! Raw input translation
//!
//! Keyboard codes follow the browser `KeyboardEvent.code` names. Anything
//! not listed here is ignored.

use crate::sim::Command;

/// Map a key code to a session command
pub fn command_for_key(code: &str) -> Option<Command> {
    match code {
        "Space" | "ArrowUp" => Some(Command::Flap),
        "KeyP" => Some(Command::TogglePause),
        "KeyR" => Some(Command::ResetAndStart),
        _ => None,
    }
}

/// Clicks and taps always flap
pub fn command_for_pointer() -> Command {
    Command::Flap
}

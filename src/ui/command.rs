//! Command parsing for the TUI command deck
//!
//! Parses user input in Command mode, supporting:
//! - `:q` or `:quit` → Quit command
//! - `:h` or `:help` → Help command
//! - `@filename.txt`, `@filename.pdf` or `@filename.epub` → Load file command
//! - `@@` → Load clipboard
//! - `:ratio 0.6` → Set the focus ratio
//! - `:short on` / `:short off` → Toggle the short-word exemption
//! - `:copy` → Copy rich text
//! - `:w out.html` → Export to a file
//! - `:clear` → Close the document

use crate::app::AppEvent;

/// Commands that can be parsed from command deck input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Help,
    LoadFile(String),
    LoadClipboard,
    Ratio(f64),
    Short(bool),
    Copy,
    Write(String),
    Clear,
    Unknown(String),
}

/// Parse command deck input string into a Command
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    // Check for empty input first
    if input.is_empty() {
        return Command::Unknown(input.to_string());
    }

    // Handle system commands starting with ':'
    if let Some(cmd) = input.strip_prefix(':') {
        let (name, arg) = match cmd.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (cmd, ""),
        };
        match (name, arg) {
            ("q" | "quit", "") => Command::Quit,
            ("h" | "help", "") => Command::Help,
            ("copy", "") => Command::Copy,
            ("clear", "") => Command::Clear,
            ("ratio", value) => value
                .parse::<f64>()
                .map(Command::Ratio)
                .unwrap_or_else(|_| Command::Unknown(input.to_string())),
            ("short", "on") => Command::Short(true),
            ("short", "off") => Command::Short(false),
            ("w" | "write", path) if !path.is_empty() => Command::Write(path.to_string()),
            _ => Command::Unknown(input.to_string()),
        }
    } else if let Some(rest) = input.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() || filename == "@" {
            Command::LoadClipboard
        } else {
            Command::LoadFile(filename.to_string())
        }
    } else {
        // Unknown command pattern
        Command::Unknown(input.to_string())
    }
}

/// Convert a parsed command into an AppEvent
///
/// This is the translation layer between command deck input and App core.
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::LoadFile(path) => AppEvent::LoadFile(path),
        Command::LoadClipboard => AppEvent::LoadClipboard,
        Command::Ratio(ratio) => AppEvent::SetRatio(ratio),
        Command::Short(on) => AppEvent::SetIgnoreShort(on),
        Command::Copy => AppEvent::Copy,
        Command::Write(path) => AppEvent::Export(path),
        Command::Clear => AppEvent::Clear,
        Command::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}

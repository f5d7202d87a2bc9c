//! Text commands understood by the headless driver and the TUI `:` prompt.

use std::str::FromStr;

use thiserror::Error;

use crate::roster::{CharacterId, Filter, ParseFilterError};

/// Usage text for every command.
pub const HELP: &[&str] = &[
    "add <name> | <class> | <level>   Add a character",
    "recruit <id>                     Recruit a character",
    "remove <id>                      Remove a character",
    "list [all|available|recruited]   Show the roster (alias: filter)",
    "counts                           Show recruited/total",
    "json                             Print the current view as JSON",
    "help                             Show this help",
    "quit                             Exit",
];

/// A parsed command.
///
/// `Add` keeps the raw field text; validation belongs to the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        name: String,
        class: String,
        level: String,
    },
    Recruit(CharacterId),
    Remove(CharacterId),
    List(Option<Filter>),
    Counts,
    Json,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("'{0}' is not a character id")]
    InvalidId(String),

    #[error(transparent)]
    Filter(#[from] ParseFilterError),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_start_matches(':').trim_start();
        let (word, rest) = match s.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (s, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "add" | "a" => parse_add(rest),
            "recruit" | "r" => parse_id(rest, "recruit <id>").map(Command::Recruit),
            "remove" | "rm" | "d" => parse_id(rest, "remove <id>").map(Command::Remove),
            "list" | "ls" | "filter" | "f" => {
                if rest.is_empty() {
                    Ok(Command::List(None))
                } else {
                    Ok(Command::List(Some(rest.parse()?)))
                }
            }
            "counts" | "count" => Ok(Command::Counts),
            "json" => Ok(Command::Json),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

fn parse_add(rest: &str) -> Result<Command, CommandError> {
    const USAGE: &str = "add <name> | <class> | <level>";

    let parts: Vec<&str> = rest.split('|').collect();
    let [name, class, level] = parts.as_slice() else {
        return Err(CommandError::Usage(USAGE));
    };

    Ok(Command::Add {
        name: name.trim().to_string(),
        class: class.trim().to_string(),
        level: level.trim().to_string(),
    })
}

fn parse_id(rest: &str, usage: &'static str) -> Result<CharacterId, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::Usage(usage));
    }
    let text = rest.trim_start_matches('#');
    text.parse::<u32>()
        .map(CharacterId)
        .map_err(|_| CommandError::InvalidId(rest.to_string()))
}

//! Error types for commands, world definitions, and configuration.
//!
//! `CommandError` is never fatal: every variant is reported to the player
//! and control returns to the main loop. Its `Display` text is the message
//! the player sees.

use std::path::PathBuf;
use thiserror::Error;

/// A player command that could not be carried out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Unknown verb.
    #[error("Unknown command '{0}'. Type 'help' for a list of commands.")]
    InvalidCommand(String),

    /// A verb that needs an argument was given none ("go", "get", "use").
    #[error("{}", missing_argument_message(.0))]
    MissingArgument(String),

    /// Nothing by that name can be picked up here, whether it never
    /// existed or was already taken.
    #[error("There is no {0} here.")]
    ItemNotFound(String),

    /// The way is gated by an item the player is not carrying.
    #[error("You need a '{item}' to go that way.")]
    ActionBlocked { item: String },

    /// The player holds the key but the passage was never opened.
    #[error("You try the key, but the way is not yet open...")]
    PassageSealed,

    #[error("You can't go {0} from here.")]
    NoSuchExit(String),

    #[error("{}", unusable_message(.item, .reason))]
    UnusableItem { item: String, reason: Unusable },

    #[error("Your inventory is empty.")]
    EmptyInventory,
}

/// Why an item could not be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unusable {
    /// Usable item, but none is carried.
    NotCarried,
    /// The item has no use.
    NoEffect,
}

/// A world definition that cannot be turned into a playable world.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("room '{0}' is referenced but never defined")]
    UnknownRoom(String),

    #[error("room '{0}' is defined more than once")]
    DuplicateRoom(String),

    #[error("world has no rooms")]
    MissingStart,

    /// Every character must start with at least 1 HP.
    #[error("'{name}' must start with more than 0 HP")]
    InvalidStats { name: String },

    #[error("invalid world definition: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read world file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration file or command-line problems.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown argument: {0}")]
    InvalidArgument(String),

    #[error("missing value for {0}")]
    MissingValue(String),
}

fn missing_argument_message(verb: &str) -> String {
    let object = match verb {
        "go" | "enter" => "where",
        _ => "what",
    };
    let mut chars = verb.chars();
    let verb: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };
    format!("{} {}?", verb, object)
}

fn unusable_message(item: &str, reason: &Unusable) -> String {
    match reason {
        Unusable::NoEffect => format!("You can't use {} like that.", item),
        Unusable::NotCarried => format!("You don't have any {}.", plural(item)),
    }
}

fn plural(item: &str) -> String {
    if item.ends_with('s') {
        item.to_string()
    } else {
        format!("{}s", item)
    }
}

//! Free-text command parsing for exploration.

use crate::core::error::CommandError;

/// An exploration command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move through an exit. Holds a direction ("north") or a passage
    /// phrase ("enter chamber").
    Go(String),
    Look,
    Get(String),
    Inventory,
    Use(String),
    Stats,
    Help,
    Quit,
}

/// Help text: (usage, description).
pub const HELP_ENTRIES: &[(&str, &str)] = &[
    ("go [direction]", "Move to another room (e.g., 'go north')"),
    ("enter [passage]", "Pass through an opened passage (e.g., 'enter chamber')"),
    ("look", "Describe the current room again"),
    ("get [item name]", "Pick up an item (e.g., 'get health potion')"),
    ("inventory", "Show your inventory"),
    ("use [item name]", "Use an item from your inventory (e.g., 'use health potion')"),
    ("stats", "Show your current stats"),
    ("help", "Show this list"),
    ("quit", "Exit the game"),
];

/// Parses one line. Blank input yields `Ok(None)`.
///
/// Input is lowercased and split on whitespace; multi-word arguments are
/// rejoined with single spaces.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.to_lowercase();
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let argument = words.collect::<Vec<_>>().join(" ");

    let needs_argument = |build: fn(String) -> Command| {
        if argument.is_empty() {
            Err(CommandError::MissingArgument(verb.to_string()))
        } else {
            Ok(build(argument.clone()))
        }
    };

    let command = match verb {
        "go" => needs_argument(Command::Go)?,
        "enter" => {
            if argument.is_empty() {
                return Err(CommandError::MissingArgument(verb.to_string()));
            }
            Command::Go(format!("enter {}", argument))
        }
        "get" => needs_argument(Command::Get)?,
        "use" => needs_argument(Command::Use)?,
        "look" => Command::Look,
        "inventory" => Command::Inventory,
        "stats" => Command::Stats,
        "help" => Command::Help,
        "quit" => Command::Quit,
        other => return Err(CommandError::InvalidCommand(other.to_string())),
    };
    Ok(Some(command))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line() {
        assert_eq!(parse_command(""), Ok(None));
        assert_eq!(parse_command("   "), Ok(None));
    }

    #[test]
    fn test_simple_verbs() {
        assert_eq!(parse_command("look"), Ok(Some(Command::Look)));
        assert_eq!(parse_command("INVENTORY"), Ok(Some(Command::Inventory)));
        assert_eq!(parse_command("stats"), Ok(Some(Command::Stats)));
        assert_eq!(parse_command("help"), Ok(Some(Command::Help)));
        assert_eq!(parse_command("quit"), Ok(Some(Command::Quit)));
    }

    #[test]
    fn test_multi_word_arguments() {
        assert_eq!(
            parse_command("get   Health   Potion"),
            Ok(Some(Command::Get("health potion".to_string())))
        );
        assert_eq!(
            parse_command("use health potion"),
            Ok(Some(Command::Use("health potion".to_string())))
        );
        assert_eq!(
            parse_command("go North"),
            Ok(Some(Command::Go("north".to_string())))
        );
    }

    #[test]
    fn test_enter_passage_forms() {
        let expected = Ok(Some(Command::Go("enter chamber".to_string())));
        assert_eq!(parse_command("enter chamber"), expected);
        assert_eq!(parse_command("go enter chamber"), expected);
    }

    #[test]
    fn test_missing_arguments() {
        for verb in ["go", "get", "use", "enter"] {
            assert_eq!(
                parse_command(verb),
                Err(CommandError::MissingArgument(verb.to_string()))
            );
        }
    }

    #[test]
    fn test_unknown_verb() {
        assert_eq!(
            parse_command("dance wildly"),
            Err(CommandError::InvalidCommand("dance".to_string()))
        );
    }
}

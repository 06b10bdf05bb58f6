//! Adventure - a turn-based text adventure.
//!
//! The library holds the whole game: characters, the room graph, combat,
//! command parsing, and the session loop. All player interaction goes
//! through [`ui::Frontend`], so the game runs the same against a terminal
//! or a scripted input list.

pub mod character;
pub mod combat;
pub mod command;
pub mod core;
pub mod events;
pub mod items;
pub mod ui;
pub mod world;

pub use crate::core::{GameConfig, GameSession, SessionOutcome};
pub use events::GameEvent;

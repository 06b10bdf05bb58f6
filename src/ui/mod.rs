//! Presentation and input boundary.
//!
//! The game logic talks to the player only through [`Frontend`]: it emits
//! [`GameEvent`]s and asks for lines of input. [`TerminalFrontend`] drives a
//! real terminal; [`ScriptedFrontend`] replays canned input in memory.

pub mod render;
pub mod scripted;
pub mod terminal;

pub use render::{prompt_text, render};
pub use scripted::ScriptedFrontend;
pub use terminal::TerminalFrontend;

use crate::events::GameEvent;

/// What the game is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    HeroName,
    Command,
    CombatAction,
    ItemChoice,
}

pub trait Frontend {
    fn emit(&mut self, event: &GameEvent);

    /// Reads one line. `None` means input has ended.
    fn prompt(&mut self, prompt: Prompt) -> Option<String>;
}

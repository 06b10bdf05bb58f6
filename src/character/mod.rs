//! Characters: shared stats, player and enemy roles, and stat logic.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;

//! World model: room graph, navigation, and progression rules.

pub mod data;
pub mod logic;
pub mod spec;
pub mod types;

pub use data::*;
pub use logic::*;
pub use spec::*;
pub use types::*;

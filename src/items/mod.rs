//! Item catalog: what each carried item does when used.

pub mod types;

pub use types::*;

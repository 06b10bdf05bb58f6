//! Rules constants, errors, configuration, and the session loop.

pub mod config;
pub mod constants;
pub mod error;
pub mod session;

pub use config::{parse_args, resolve_cli, CliAction, GameConfig};
pub use constants::*;
pub use error::*;
pub use session::*;

//! Player configuration: an optional JSON file overridden by command-line flags.

use super::constants::{CONFIG_FILE_NAME, DEFAULT_LOG_FILTER, DEFAULT_TEXT_DELAY_MS};
use super::error::ConfigError;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Per-character typewriter delay. Zero prints instantly.
    pub text_delay_ms: u64,
    pub clear_screen: bool,
    /// Fixed RNG seed for reproducible runs.
    pub seed: Option<u64>,
    /// JSON world definition to play instead of the built-in world.
    pub world_file: Option<PathBuf>,
    /// Skips the name prompt when set.
    pub hero_name: Option<String>,
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            text_delay_ms: DEFAULT_TEXT_DELAY_MS,
            clear_screen: true,
            seed: None,
            world_file: None,
            hero_name: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl GameConfig {
    /// Platform config file location, if a home directory can be found.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "adventure").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Loads the config from its platform location, falling back to
    /// defaults when there is no file.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads `path`. A missing file yields defaults; an unreadable or
    /// malformed one is an error.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    Play(GameConfig),
    Version,
    Help,
}

pub const USAGE: &str = "\
Usage: adventure [options]

Options:
  --seed N        Use a fixed random seed
  --world PATH    Play a JSON world definition
  --name NAME     Hero name (skips the prompt)
  --fast          Print text instantly
  --delay MS      Typewriter delay per character
  --no-clear      Never clear the screen
  --version       Show version information
  --help          Show this help message";

/// Applies command-line flags on top of `config`. `args` excludes the
/// program name.
pub fn parse_args(args: &[String], mut config: GameConfig) -> Result<CliAction, ConfigError> {
    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "-v" | "--version" => return Ok(CliAction::Version),
            "-h" | "--help" => return Ok(CliAction::Help),
            "--fast" => config.text_delay_ms = 0,
            "--no-clear" => config.clear_screen = false,
            "--seed" | "--world" | "--name" | "--delay" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| ConfigError::MissingValue(flag.to_string()))?;
                i += 1;
                match flag {
                    "--seed" => config.seed = Some(parse_number(flag, value)?),
                    "--delay" => config.text_delay_ms = parse_number(flag, value)?,
                    "--world" => config.world_file = Some(PathBuf::from(value)),
                    _ => config.hero_name = Some(value.clone()),
                }
            }
            other => return Err(ConfigError::InvalidArgument(other.to_string())),
        }
        i += 1;
    }
    Ok(CliAction::Play(config))
}

/// Resolves the command line against a config that is only loaded when the
/// game will actually run. Help, version and bad flags are answered without
/// calling `load`, so a broken config file cannot hide them.
pub fn resolve_cli<F>(args: &[String], load: F) -> Result<CliAction, ConfigError>
where
    F: FnOnce() -> Result<GameConfig, ConfigError>,
{
    match parse_args(args, GameConfig::default())? {
        CliAction::Play(_) => parse_args(args, load()?),
        info => Ok(info),
    }
}

fn parse_number(flag: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::InvalidArgument(format!("{} {}", flag, value)))
}

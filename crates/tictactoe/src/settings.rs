//! Game settings from an optional TOML file and the command line.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Deserializer, Serialize};
use std::io::ErrorKind;
use std::path::Path;
use tictactoe_engine::Token;
use tracing::{debug, instrument};

/// Trace directives used when `RUST_LOG` is unset.
pub const DEFAULT_TRACE_FILTER: &str = "tictactoe=trace,tictactoe_engine=trace";

/// Startup configuration for one game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// The human's token.
    #[serde(deserialize_with = "token_from_initial")]
    token: Token,

    /// Whether the debug trace starts enabled.
    debug: bool,

    /// `tracing` filter directives for the debug trace.
    trace_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            token: Token::FIRST,
            debug: false,
            trace_filter: DEFAULT_TRACE_FILTER.to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;
        Self::parse(&content)
    }

    /// Loads settings from `path`, falling back to defaults if it does not
    /// exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(content) => Self::parse(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(ConfigError::new(format!(
                "Failed to read config file: {}",
                e
            ))),
        }
    }

    fn parse(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        debug!(?settings, "Config loaded");
        Ok(settings)
    }

    /// Applies command-line overrides.
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(token) = cli.token {
            self.token = token;
        }
        self.debug |= cli.debug;
        self
    }
}

fn token_from_initial<'de, D>(deserializer: D) -> Result<Token, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Token::from_initial(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("expected x or o, got {:?}", raw)))
}

/// A settings file that could not be read or parsed.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// What went wrong, including the underlying I/O or TOML message.
    pub message: String,
    /// Line in this crate that raised the error.
    pub line: u32,
    /// File in this crate that raised the error.
    pub file: &'static str,
}

impl ConfigError {
    /// Records `message` with the caller's location.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(*settings.token(), Token::O);
        assert!(!*settings.debug());
        assert_eq!(settings.trace_filter(), DEFAULT_TRACE_FILTER);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings: Settings = toml::from_str("token = \"x\"").unwrap();
        assert_eq!(*settings.token(), Token::X);
        assert_eq!(settings.trace_filter(), DEFAULT_TRACE_FILTER);
    }

    #[test]
    fn test_token_key_reads_first_character() {
        let settings: Settings = toml::from_str("token = \"Oscar\"").unwrap();
        assert_eq!(*settings.token(), Token::O);
        let settings: Settings = toml::from_str("token = \"xray\"").unwrap();
        assert_eq!(*settings.token(), Token::X);
        assert!(toml::from_str::<Settings>("token = \"zulu\"").is_err());
    }

    #[test]
    fn test_cli_overrides_file() {
        let settings: Settings = toml::from_str("token = \"X\"\ndebug = false").unwrap();
        let cli = Cli::try_parse_from(["tictactoe", "-t", "o", "-d"]).unwrap();
        let merged = settings.with_cli(&cli);
        assert_eq!(*merged.token(), Token::O);
        assert!(*merged.debug());
    }

    #[test]
    fn test_cli_without_flags_keeps_file() {
        let settings: Settings = toml::from_str("token = \"X\"\ndebug = true").unwrap();
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        let merged = settings.clone().with_cli(&cli);
        assert_eq!(merged, settings);
    }
}

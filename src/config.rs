//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, instrument};

/// File looked for in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "noughts.toml";

/// Who sits on each side.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Deserialize,
    strum::Display,
    strum::EnumString,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GameMode {
    /// Human O against human X.
    Pvp,
    /// Human O against a bot playing X.
    #[default]
    Pve,
    /// Two bots.
    Eve,
}

/// Kind of automated player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Deserialize,
    strum::Display,
    strum::EnumString,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BotKind {
    /// Exhaustive minimax search; never loses.
    #[default]
    Minimax,
    /// Uniformly random legal moves.
    Random,
}

/// Configuration for one console game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
pub struct GameConfig {
    /// Seating of humans and bots.
    #[serde(default)]
    mode: GameMode,

    /// True if player one (O) opens, false if player two (X) does.
    #[serde(default = "default_start_first")]
    start_first: bool,

    /// Which bot fills the automated seats.
    #[serde(default)]
    bot: BotKind,

    /// Seed for the random bot; unseeded when absent.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_start_first() -> bool {
    true
}

impl GameConfig {
    /// Creates the default configuration: human O opens against minimax X.
    pub fn new() -> Self {
        Self {
            mode: GameMode::default(),
            start_first: default_start_first(),
            bot: BotKind::default(),
            seed: None,
        }
    }

    /// Sets the game mode.
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets whether player one (O) opens.
    pub fn with_start_first(mut self, start_first: bool) -> Self {
        self.start_first = start_first;
        self
    }

    /// Sets the bot kind.
    pub fn with_bot(mut self, bot: BotKind) -> Self {
        self.bot = bot;
        self
    }

    /// Seeds the random bot.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = %config.mode, bot = %config.bot, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_FILE`] if it exists,
    /// else the defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::new())
            }
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
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
    use std::str::FromStr;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(*config.mode(), GameMode::Pve);
        assert!(*config.start_first());
        assert_eq!(*config.bot(), BotKind::Minimax);
        assert_eq!(*config.seed(), None);
    }

    #[test]
    fn test_missing_keys_take_defaults() {
        let config: GameConfig = toml::from_str("mode = \"eve\"").unwrap();
        assert_eq!(*config.mode(), GameMode::Eve);
        assert!(*config.start_first());
        assert_eq!(*config.bot(), BotKind::Minimax);
    }

    #[test]
    fn test_setters_override() {
        let config = GameConfig::new()
            .with_mode(GameMode::Pvp)
            .with_start_first(false)
            .with_bot(BotKind::Random)
            .with_seed(7);
        assert_eq!(*config.mode(), GameMode::Pvp);
        assert!(!*config.start_first());
        assert_eq!(*config.bot(), BotKind::Random);
        assert_eq!(*config.seed(), Some(7));
    }

    #[test]
    fn test_mode_names() {
        assert_eq!(GameMode::from_str("eve").unwrap(), GameMode::Eve);
        assert_eq!(BotKind::Random.to_string(), "random");
        assert!(GameMode::from_str("solo").is_err());
    }

    #[test]
    fn test_config_error_records_location() {
        let err = ConfigError::new("boom".to_string());
        assert!(err.file.ends_with("config.rs"));
        assert!(err.to_string().starts_with("Config error: boom at "));
    }
}

//! Session settings: defaults, TOML file, environment and CLI overrides.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tictac_engine::{GameMode, Mark};
use tracing::{debug, info, instrument};

/// Environment variable that supplies a seed when the CLI does not.
pub const SEED_ENV: &str = "TICTAC_SEED";

/// User-configurable settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Single-player or two-player.
    mode: GameMode,

    /// The human (active) player's mark.
    player: Mark,

    /// Delay before the computer's reply, in milliseconds.
    reply_delay_ms: u64,

    /// Seed for reproducible computer moves.
    seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            mode: GameMode::Single,
            player: Mark::X,
            reply_delay_ms: 300,
            seed: None,
        }
    }
}

impl Settings {
    /// Resolves settings from every source, later sources winning:
    /// defaults, the TOML file named by `cli.config`, the environment, then
    /// CLI flags.
    #[instrument(skip(cli), fields(config = %cli.config.display()))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let settings = Self::from_file_or_default(&cli.config)?
            .with_env_seed(std::env::var(SEED_ENV).ok())?
            .with_cli(cli);
        info!(?settings, "Settings resolved");
        Ok(settings)
    }

    /// Loads settings from a TOML file, or the defaults if it does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if !path.as_ref().exists() {
            debug!("No settings file, using defaults");
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read settings file: {}", e))
        })?;

        let settings: Self = toml::from_str(&content).map_err(|e| {
            ConfigError::new(format!("Failed to parse settings: {}", e))
        })?;

        info!(mode = %settings.mode, player = %settings.player, "Settings loaded");
        Ok(settings)
    }

    /// Applies a seed taken from the environment, if one is set.
    #[instrument(skip(self))]
    pub fn with_env_seed(mut self, value: Option<String>) -> Result<Self, ConfigError> {
        if let Some(value) = value {
            let seed = value.trim().parse::<u64>().map_err(|e| {
                ConfigError::new(format!("{} is not a valid seed ({}): {}", SEED_ENV, value, e))
            })?;
            self.seed = Some(seed);
        }
        Ok(self)
    }

    /// Applies any flags given on the command line.
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(mode) = cli.mode {
            self.mode = mode;
        }
        if let Some(player) = cli.player {
            self.player = player;
        }
        if let Some(delay) = cli.delay_ms {
            self.reply_delay_ms = delay;
        }
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        self
    }

    /// The computer's reply delay.
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
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

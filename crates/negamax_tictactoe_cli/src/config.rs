//! Game configuration: who plays which side.

use derive_getters::Getters;
use derive_more::{Display, Error};
use negamax_tictactoe::Player;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Who controls a side.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Moves typed on standard input.
    #[display("human")]
    Human,
    /// Moves chosen by the negamax search.
    #[display("computer")]
    Computer,
}

/// Configuration for a game session.
///
/// Every field is optional in the TOML file; missing fields take the
/// defaults (computer plays Cross, human plays Circle).
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Controller of Cross.
    cross: PlayerKind,
    /// Controller of Circle.
    circle: PlayerKind,
    /// Print the free cells before each prompt.
    show_free_cells: bool,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            cross: PlayerKind::Computer,
            circle: PlayerKind::Human,
            show_free_cells: false,
        }
    }
}

impl PlayConfig {
    /// Creates a configuration with explicit controllers.
    pub fn new(cross: PlayerKind, circle: PlayerKind) -> Self {
        Self {
            cross,
            circle,
            show_free_cells: false,
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(cross = %config.cross, circle = %config.circle, "Config loaded successfully");
        Ok(config)
    }

    /// Applies command-line overrides on top of this configuration.
    pub fn with_overrides(
        mut self,
        cross: Option<PlayerKind>,
        circle: Option<PlayerKind>,
        show_free_cells: bool,
    ) -> Self {
        if let Some(kind) = cross {
            self.cross = kind;
        }
        if let Some(kind) = circle {
            self.circle = kind;
        }
        self.show_free_cells |= show_free_cells;
        self
    }

    /// Returns the controller of `player`.
    pub fn kind_for(&self, player: Player) -> PlayerKind {
        match player {
            Player::Cross => self.cross,
            Player::Circle => self.circle,
        }
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
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

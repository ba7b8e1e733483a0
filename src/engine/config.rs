//! Game settings supplied by the host.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Color, FenError, Position};

/// Start position used when none is configured.
pub const DEFAULT_START_POSITION: &str = "b2k3b/8/8/8/8/8/8/1R3K3 w 0 1";

/// Settings for one game.
///
/// The engine reads these and never writes them back. With the `serde`
/// feature, missing fields fall back to their defaults when deserializing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct EngineConfig {
    /// Position string the game starts from
    pub start_position: String,
    /// Search depth in plies; values below 1 are treated as 1
    pub difficulty: u32,
    /// Color of the local player; the bot takes the other one
    pub player_color: Color,
    /// Let a searcher pick the player's moves as well
    pub player_is_bot: bool,
    /// The opposing side is a second human rather than the bot
    pub enemy_is_player: bool,
    /// Clock per side in minutes, shown by the host
    pub time_limit_minutes: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            start_position: DEFAULT_START_POSITION.to_string(),
            difficulty: 4,
            player_color: Color::White,
            player_is_bot: false,
            enemy_is_player: false,
            time_limit_minutes: 15,
        }
    }
}

impl EngineConfig {
    /// Depth actually searched.
    #[must_use]
    pub fn search_depth(&self) -> u32 {
        self.difficulty.max(1)
    }

    #[must_use]
    pub fn bot_color(&self) -> Color {
        self.player_color.opponent()
    }

    /// Whether a searcher chooses the moves of `color`.
    #[must_use]
    pub fn is_bot_driven(&self, color: Color) -> bool {
        if color == self.player_color {
            self.player_is_bot
        } else {
            !self.enemy_is_player
        }
    }

    /// Check that the start position parses.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Position::try_from_fen(&self.start_position)
            .map(|_| ())
            .map_err(|error| ConfigError::InvalidStartPosition {
                fen: self.start_position.clone(),
                error,
            })
    }
}

/// Error type for unusable settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The configured start position does not parse
    InvalidStartPosition { fen: String, error: FenError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidStartPosition { fen, error } => {
                write!(f, "Invalid start position '{fen}': {error}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidStartPosition { error, .. } => Some(error),
        }
    }
}

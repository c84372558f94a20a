//! Game driver configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board width {0} cannot hold the 4-wide stick")]
    TooNarrow(usize),
    #[error("visible height must be at least 1")]
    NoPlayArea,
    #[error("top space {0} is too short to spawn into; need at least 3 rows")]
    TopSpaceTooShort(usize),
    #[error("gravity interval must be at least 1 brain tick")]
    ZeroGravityInterval,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: usize,
    /// Rows a placed stack may occupy before the game ends.
    pub visible_height: usize,
    /// Spawn buffer above the visible rows.
    pub top_space: usize,
    /// Brain ticks between two gravity `Down`s.
    pub gravity_interval: u32,
    /// A piece still falling after this many ticks is hard-dropped.
    pub max_ticks_per_piece: u32,
}

impl GameConfig {
    /// 10 x 20 with a 4-row spawn buffer; gravity every 100 brain ticks.
    pub fn standard() -> Self {
        Self {
            width: 10,
            visible_height: 20,
            top_space: 4,
            gravity_interval: 100,
            max_ticks_per_piece: 10_000,
        }
    }

    pub fn board_height(&self) -> usize {
        self.visible_height + self.top_space
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < 4 {
            return Err(ConfigError::TooNarrow(self.width));
        }
        if self.visible_height == 0 {
            return Err(ConfigError::NoPlayArea);
        }
        if self.top_space < 3 {
            return Err(ConfigError::TopSpaceTooShort(self.top_space));
        }
        if self.gravity_interval == 0 {
            return Err(ConfigError::ZeroGravityInterval);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}

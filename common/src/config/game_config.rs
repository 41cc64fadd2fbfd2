use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::games::tictactoe::{PlayerType, PlayerTypes};
use super::Validate;

pub const MAX_AUTOMATED_MOVE_DELAY_MS: u32 = 5_000;

/// Who controls each side, as offered by the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    PlayerVsPlayer,
    PlayerAsX,
    PlayerAsO,
    Watch,
}

impl GameMode {
    pub fn player_types(self) -> PlayerTypes {
        match self {
            GameMode::PlayerVsPlayer => PlayerTypes::new(PlayerType::Human, PlayerType::Human),
            GameMode::PlayerAsX => PlayerTypes::new(PlayerType::Human, PlayerType::Automated),
            GameMode::PlayerAsO => PlayerTypes::new(PlayerType::Automated, PlayerType::Human),
            GameMode::Watch => PlayerTypes::new(PlayerType::Automated, PlayerType::Automated),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub mode: GameMode,
    pub automated_move_delay_ms: u32,
    pub verbose_logging: bool,
}

impl GameConfig {
    pub fn automated_move_delay(&self) -> Duration {
        Duration::from_millis(self.automated_move_delay_ms as u64)
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.automated_move_delay_ms > MAX_AUTOMATED_MOVE_DELAY_MS {
            return Err(format!(
                "automated_move_delay_ms must not exceed {}",
                MAX_AUTOMATED_MOVE_DELAY_MS
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::PlayerAsX,
            automated_move_delay_ms: 500,
            verbose_logging: false,
        }
    }
}

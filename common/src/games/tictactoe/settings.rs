use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::types::Difficulty;

pub const DEFAULT_BOT_DELAY_MS: u64 = 500;
pub const MAX_BOT_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TicTacToeSettings {
    pub difficulty: Difficulty,
    /// Pause before the bot answers, in milliseconds.
    pub bot_delay_ms: u64,
    /// Fixed seed for reproducible games; random when absent.
    pub seed: Option<u64>,
}

impl Default for TicTacToeSettings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            bot_delay_ms: DEFAULT_BOT_DELAY_MS,
            seed: None,
        }
    }
}

impl Validate for TicTacToeSettings {
    fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!(
                "Bot delay ({} ms) cannot exceed {} ms",
                self.bot_delay_ms, MAX_BOT_DELAY_MS
            ));
        }
        Ok(())
    }
}

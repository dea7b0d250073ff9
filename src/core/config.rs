//! Game configuration.
//!
//! The rules of La Chouine are fixed, but a few table parameters are kept
//! configurable so variants and test positions don't need code changes:
//! - `hand_size`: cards dealt to each side (5)
//! - `last_trick_bonus`: points for winning the final trick (10)
//! - `quinte_threshold`: brisques needed for a quinte (5)

use serde::{Deserialize, Serialize};

use super::card::DECK_SIZE;

/// Largest hand that still leaves room for the other hand and the trump card.
pub const MAX_HAND_SIZE: usize = (DECK_SIZE - 1) / 2;

/// Invalid configuration values.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("hand size {0} out of range 1..=15")]
    HandSize(usize),
    #[error("quinte threshold {0} out of range 1..=8")]
    QuinteThreshold(usize),
}

/// Table parameters for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cards dealt to each side, and the size hands are refilled to.
    pub hand_size: usize,

    /// Flat bonus for the side that wins the last trick.
    pub last_trick_bonus: u32,

    /// Number of brisques (aces and tens) that make a quinte.
    pub quinte_threshold: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: 5,
            last_trick_bonus: 10,
            quinte_threshold: 5,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Set the last-trick bonus.
    #[must_use]
    pub fn with_last_trick_bonus(mut self, bonus: u32) -> Self {
        self.last_trick_bonus = bonus;
        self
    }

    /// Set the number of brisques needed for a quinte.
    #[must_use]
    pub fn with_quinte_threshold(mut self, threshold: usize) -> Self {
        self.quinte_threshold = threshold;
        self
    }

    /// Check that the parameters describe a playable table.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_HAND_SIZE).contains(&self.hand_size) {
            return Err(ConfigError::HandSize(self.hand_size));
        }
        if !(1..=8).contains(&self.quinte_threshold) {
            return Err(ConfigError::QuinteThreshold(self.quinte_threshold));
        }
        Ok(())
    }

    /// Cards left in the talon right after the deal.
    #[must_use]
    pub fn talon_after_deal(&self) -> usize {
        DECK_SIZE - 2 * self.hand_size - 1
    }
}

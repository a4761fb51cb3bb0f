//! Game configuration.
//!
//! Hosts configure the engine at startup by providing a `GameConfig`:
//! - how many distinct pairs to deal
//! - an optional seed for reproducible deals
//! - whether a won game deals a fresh board automatically
//!
//! The engine never hardcodes the board size; the classic twelve-pair board
//! is only the default.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Number of pairs dealt when no count is configured.
pub const DEFAULT_PAIR_COUNT: usize = 12;

/// Largest board the engine accepts.
pub const MAX_PAIR_COUNT: usize = 1024;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of distinct pairs (the deck holds twice as many cards).
    pub pair_count: usize,

    /// Seed for the dealing RNG. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Deal a new board immediately after the win notification.
    pub auto_reset_on_win: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pair_count: DEFAULT_PAIR_COUNT,
            seed: None,
            auto_reset_on_win: true,
        }
    }
}

impl GameConfig {
    /// Create a configuration for `pair_count` pairs.
    ///
    /// The count is checked by `validate`, not here, so hosts can build a
    /// config from untrusted input and report the error themselves.
    #[must_use]
    pub fn new(pair_count: usize) -> Self {
        Self {
            pair_count,
            ..Self::default()
        }
    }

    /// Set the dealing seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Keep the won board on screen instead of dealing a new one.
    #[must_use]
    pub fn without_auto_reset(mut self) -> Self {
        self.auto_reset_on_win = false;
        self
    }

    /// Number of cards in a deck dealt with this config.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.pair_count * 2
    }

    /// Check the pair count is in `1..=MAX_PAIR_COUNT`.
    pub fn validate(&self) -> Result<(), GameError> {
        validate_pair_count(self.pair_count)
    }
}

pub(crate) fn validate_pair_count(pair_count: usize) -> Result<(), GameError> {
    if pair_count == 0 || pair_count > MAX_PAIR_COUNT {
        return Err(GameError::InvalidConfiguration {
            pair_count,
            max: MAX_PAIR_COUNT,
        });
    }
    Ok(())
}

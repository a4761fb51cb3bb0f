//! Core engine types: RNG, configuration, clock, errors.
//!
//! This module contains the building blocks the game is assembled from.
//! Hosts configure the engine via `GameConfig` rather than modifying it.

pub mod rng;
pub mod config;
pub mod clock;
pub mod error;

pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, DEFAULT_PAIR_COUNT, MAX_PAIR_COUNT};
pub use clock::{elapsed_between, format_elapsed, Clock, ManualClock, SystemClock};
pub use error::GameError;

//! # memory-pairs
//!
//! A pair-matching ("memory") card game engine.
//!
//! A grid of face-down cards is dealt; the player turns up two at a time.
//! Matching pairs stay revealed, mismatches stay up until the next click and
//! then flip back. The engine counts failed attempts, times the session from
//! the first click, and deals a fresh board once every pair is found.
//!
//! ## Design Principles
//!
//! 1. **Pure state machine**: The engine owns no UI. Each operation returns
//!    the `GameEvent`s it produced; hosts render from those or from a
//!    `BoardView` snapshot.
//!
//! 2. **No ambient globals**: All state lives in a `MemoryGame` value, so
//!    any number of independent games can run side by side.
//!
//! 3. **Deterministic when asked**: Seeded ChaCha8 dealing and an injectable
//!    `Clock` make every game reproducible.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, clock, errors
//! - `cards`: Card identity and state, deck dealing, shuffle policies
//! - `events`: Events returned by engine operations
//! - `game`: Session state and the `MemoryGame` engine
//! - `view`: Render-ready board snapshots
//!
//! ## Example
//!
//! ```
//! use memory_pairs::{CardIndex, GameEvent, KeepOrder, ManualClock, MemoryGame};
//!
//! // Two pairs dealt in order: 1, 2, 1, 2
//! let mut game = MemoryGame::builder()
//!     .pair_count(2)
//!     .shuffle(KeepOrder)
//!     .clock(ManualClock::new())
//!     .build()
//!     .unwrap();
//!
//! game.click(CardIndex::new(0)).unwrap();
//! game.click(CardIndex::new(2)).unwrap();
//! game.click(CardIndex::new(1)).unwrap();
//! let events = game.click(CardIndex::new(3)).unwrap();
//!
//! assert!(events.iter().any(|e| matches!(e, GameEvent::Won { attempts: 0, .. })));
//! ```

pub mod core;
pub mod cards;
pub mod events;
pub mod game;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    Clock, GameConfig, GameError, GameRng, GameRngState, ManualClock, SystemClock,
    format_elapsed,
};

pub use crate::cards::{
    Card, CardIndex, CardState, Deck, FisherYates, KeepOrder, PairId, ShufflePolicy,
};

pub use crate::events::{GameEvent, IgnoreReason};

pub use crate::game::{MemoryGame, MemoryGameBuilder, Session};

pub use crate::view::{BoardView, SlotView};

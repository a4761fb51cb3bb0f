//! The pairs game: session state and the engine driving it.
//!
//! `MemoryGame` is a single-threaded state machine. A host serialises card
//! clicks, reset requests, and timer ticks into calls on one instance;
//! independent games share nothing.

pub mod engine;
pub mod session;

pub use engine::{MemoryGame, MemoryGameBuilder};
pub use session::Session;

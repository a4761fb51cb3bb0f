//! Render-ready snapshots of a game.
//!
//! The engine never touches visual elements. A host UI captures a
//! `BoardView` after each call (or each timer tick) and draws it.

pub mod board;

pub use board::{BoardView, SlotView};

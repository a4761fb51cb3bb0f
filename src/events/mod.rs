//! Events returned by engine operations.
//!
//! The engine is a pure state machine; hosts learn what changed from the
//! events each call returns.

pub mod event;

pub use event::{GameEvent, IgnoreReason};

//! Per-deal session state: attempts, timer start, and the current selection.

use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardIndex;
use crate::core::clock::elapsed_between;

/// Session counters for the deal in progress.
///
/// ## Selection
///
/// Holds zero, one, or two face-up unmatched cards:
/// - 0: waiting for a first pick
/// - 1: waiting for a second pick
/// - 2: a mismatch is showing; the next click only clears it
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Number of mismatched pairs turned up.
    pub attempts: u32,

    /// When the first click of the session happened.
    pub started_at: Option<SystemTime>,

    selection: SmallVec<[CardIndex; 2]>,
}

impl Session {
    /// A fresh session: no attempts, timer not started, nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected cards, in pick order.
    #[must_use]
    pub fn selection(&self) -> &[CardIndex] {
        &self.selection
    }

    /// The lone first pick, if exactly one card is selected.
    #[must_use]
    pub fn first_pick(&self) -> Option<CardIndex> {
        match self.selection[..] {
            [first] => Some(first),
            _ => None,
        }
    }

    /// The showing mismatch, if two cards are selected.
    #[must_use]
    pub fn showing_mismatch(&self) -> Option<(CardIndex, CardIndex)> {
        match self.selection[..] {
            [first, second] => Some((first, second)),
            _ => None,
        }
    }

    /// Whether the timer has started.
    #[must_use]
    pub fn is_timing(&self) -> bool {
        self.started_at.is_some()
    }

    /// Record the session start unless it is already set.
    ///
    /// Returns true if this call started the timer.
    pub fn start_timer(&mut self, now: SystemTime) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        self.started_at = Some(now);
        true
    }

    /// Time since the first click, or zero before it.
    #[must_use]
    pub fn elapsed(&self, now: SystemTime) -> Duration {
        self.started_at
            .map(|start| elapsed_between(start, now))
            .unwrap_or(Duration::ZERO)
    }

    pub(crate) fn select(&mut self, card: CardIndex) {
        debug_assert!(self.selection.len() < 2, "selection holds at most two cards");
        self.selection.push(card);
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selection.clear();
    }
}

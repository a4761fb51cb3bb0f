//! Game event types.
//!
//! Every engine operation returns the events it produced, in order. A render
//! layer applies them to its view (or simply re-reads the board) instead of
//! the engine touching any visual element itself.

use serde::{Deserialize, Serialize};

use crate::cards::CardIndex;

/// Why a click changed nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// The card already belongs to a matched pair.
    AlreadyMatched,
    /// The card is the current first pick.
    AlreadySelected,
}

/// Something that happened during a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A fresh, face-down deck was dealt and the session counters cleared.
    Dealt { pair_count: usize },

    /// The session timer started on the first click.
    TimerStarted,

    /// A card was turned face up as the first pick of a pair.
    CardSelected { card: CardIndex },

    /// Two cards of the same pair were found.
    PairMatched { first: CardIndex, second: CardIndex },

    /// The second pick did not match. Both cards stay face up until the
    /// next click.
    PairMismatched {
        first: CardIndex,
        second: CardIndex,
        attempts: u32,
    },

    /// A showing mismatch was turned back face down. The click that caused
    /// this selects nothing.
    SelectionCleared { first: CardIndex, second: CardIndex },

    /// A click on a card that cannot be picked.
    ClickIgnored { card: CardIndex, reason: IgnoreReason },

    /// Every card is matched.
    Won { attempts: u32, elapsed: String },
}

impl GameEvent {
    /// Whether this event changed any card's visible state.
    #[must_use]
    pub fn changes_board(&self) -> bool {
        !matches!(self, GameEvent::TimerStarted | GameEvent::ClickIgnored { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changes_board() {
        assert!(GameEvent::Dealt { pair_count: 2 }.changes_board());
        assert!(GameEvent::CardSelected { card: CardIndex::new(0) }.changes_board());
        assert!(!GameEvent::TimerStarted.changes_board());
        assert!(!GameEvent::ClickIgnored {
            card: CardIndex::new(0),
            reason: IgnoreReason::AlreadyMatched,
        }
        .changes_board());
    }

    #[test]
    fn test_event_serde() {
        let event = GameEvent::Won {
            attempts: 7,
            elapsed: "01:05".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}

//! Board snapshot for render layers.

use serde::Serialize;

use crate::cards::{CardIndex, CardState, PairId};
use crate::game::MemoryGame;

/// One card slot as a render layer should draw it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SlotView {
    pub index: CardIndex,
    pub pair: PairId,
    pub state: CardState,
    /// Visual class for the state (`"active"`, `"match"`), if any.
    pub class: Option<&'static str>,
    /// Face image path for the slot's pair.
    pub asset: String,
}

/// Everything a render layer needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub slots: Vec<SlotView>,
    pub attempts: u32,
    pub elapsed: String,
    pub won: bool,
}

impl BoardView {
    /// Capture the current board and counters of `game`.
    #[must_use]
    pub fn capture(game: &MemoryGame) -> Self {
        let slots = game
            .deck()
            .iter()
            .map(|card| SlotView {
                index: card.index,
                pair: card.pair,
                state: card.state,
                class: card.state.css_class(),
                asset: card.pair.asset_path(),
            })
            .collect();

        Self {
            slots,
            attempts: game.attempts(),
            elapsed: game.elapsed_text(),
            won: game.is_won(),
        }
    }

    /// Slots split into grid rows of `columns` cards.
    pub fn rows(&self, columns: usize) -> impl Iterator<Item = &[SlotView]> + '_ {
        self.slots.chunks(columns.max(1))
    }

    /// Number of slots showing their face.
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.slots.iter().filter(|s| s.state.is_revealed()).count()
    }

    /// Text for the attempts counter.
    #[must_use]
    pub fn attempts_text(&self) -> String {
        self.attempts.to_string()
    }

    /// Final summary shown when the board is cleared.
    #[must_use]
    pub fn win_message(attempts: u32, elapsed: &str) -> String {
        format!("You won with {} failed attempts in {}!", attempts, elapsed)
    }
}

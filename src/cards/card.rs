//! Card identity and per-card state.
//!
//! A card is identified by its position in the dealt grid (`CardIndex`) and
//! carries the id of the pair it belongs to (`PairId`). Exactly two cards in
//! a deck share each pair id.

use serde::{Deserialize, Serialize};

/// Position of a card in the dealt grid.
///
/// Fixed for the lifetime of a deal; a reset produces a new deck and the
/// same index then names a different card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardIndex(pub usize);

impl CardIndex {
    /// Create a new card index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    #[must_use]
    pub const fn raw(self) -> usize {
        self.0
    }
}

impl From<usize> for CardIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for CardIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Identifier shared by the two cards of a pair, in `1..=pair_count`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PairId(pub u32);

impl PairId {
    /// Create a new pair ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Name of the face image for this pair.
    ///
    /// ```
    /// use memory_pairs::cards::PairId;
    ///
    /// assert_eq!(PairId::new(7).asset_name(), "char-7");
    /// ```
    #[must_use]
    pub fn asset_name(self) -> String {
        format!("char-{}", self.0)
    }

    /// Relative path of the face image for this pair.
    #[must_use]
    pub fn asset_path(self) -> String {
        format!("img/{}.png", self.asset_name())
    }
}

impl std::fmt::Display for PairId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pair({})", self.0)
    }
}

/// Visible state of a card.
///
/// `FaceDown -> Selected -> {Matched | FaceDown}`. `Matched` is terminal
/// until the next deal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardState {
    #[default]
    FaceDown,
    Selected,
    Matched,
}

impl CardState {
    /// Visual class a render layer applies for this state.
    ///
    /// Face-down cards use the default styling and have no class.
    #[must_use]
    pub const fn css_class(self) -> Option<&'static str> {
        match self {
            CardState::FaceDown => None,
            CardState::Selected => Some("active"),
            CardState::Matched => Some("match"),
        }
    }

    /// Whether the card's face is showing.
    #[must_use]
    pub const fn is_revealed(self) -> bool {
        !matches!(self, CardState::FaceDown)
    }
}

/// A dealt card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Grid position.
    pub index: CardIndex,

    /// The pair this card belongs to.
    pub pair: PairId,

    /// Current state.
    pub state: CardState,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(index: CardIndex, pair: PairId) -> Self {
        Self {
            index,
            pair,
            state: CardState::FaceDown,
        }
    }

    #[must_use]
    pub const fn is_matched(&self) -> bool {
        matches!(self.state, CardState::Matched)
    }

    #[must_use]
    pub const fn is_selected(&self) -> bool {
        matches!(self.state, CardState::Selected)
    }

    /// Two distinct cards of the same pair.
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.pair == other.pair && self.index != other.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_index() {
        let index = CardIndex::new(5);
        assert_eq!(index.raw(), 5);
        assert_eq!(CardIndex::from(5), index);
        assert_eq!(format!("{}", index), "Card(5)");
    }

    #[test]
    fn test_asset_naming() {
        let pair = PairId::new(12);
        assert_eq!(pair.asset_name(), "char-12");
        assert_eq!(pair.asset_path(), "img/char-12.png");
        assert_eq!(format!("{}", pair), "Pair(12)");
    }

    #[test]
    fn test_css_classes() {
        assert_eq!(CardState::FaceDown.css_class(), None);
        assert_eq!(CardState::Selected.css_class(), Some("active"));
        assert_eq!(CardState::Matched.css_class(), Some("match"));
    }

    #[test]
    fn test_new_card_is_face_down() {
        let card = Card::new(CardIndex::new(0), PairId::new(1));
        assert_eq!(card.state, CardState::FaceDown);
        assert!(!card.state.is_revealed());
        assert!(!card.is_matched());
        assert!(!card.is_selected());
    }

    #[test]
    fn test_pairs_with() {
        let a = Card::new(CardIndex::new(0), PairId::new(1));
        let b = Card::new(CardIndex::new(3), PairId::new(1));
        let c = Card::new(CardIndex::new(4), PairId::new(2));

        assert!(a.pairs_with(&b));
        assert!(b.pairs_with(&a));
        assert!(!a.pairs_with(&c));
        // A card never pairs with itself
        assert!(!a.pairs_with(&a));
    }

    #[test]
    fn test_serialization() {
        let card = Card {
            index: CardIndex::new(2),
            pair: PairId::new(4),
            state: CardState::Matched,
        };
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}

//! Deck dealing and shuffle policies.
//!
//! A deck of `pair_count` pairs holds `2 * pair_count` cards. Slot `i` is
//! first assigned pair `(i % pair_count) + 1`, so every pair id appears
//! exactly twice, and the pair ids are then permuted by a `ShufflePolicy`.
//!
//! Cards live in an `im::Vector` so a deck snapshot handed to a render
//! layer is an O(1) clone.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardIndex, CardState, PairId};
use crate::core::config::validate_pair_count;
use crate::core::{GameError, GameRng};

// =============================================================================
// Shuffle Policy
// =============================================================================

/// Policy for ordering pair ids when a deck is dealt.
pub trait ShufflePolicy: Send + Sync {
    /// Reorder `pairs` in place.
    fn shuffle(&self, pairs: &mut [PairId], rng: &mut GameRng);
}

/// Uniform shuffle: every ordering of the deck is equally likely.
#[derive(Clone, Copy, Debug, Default)]
pub struct FisherYates;

impl ShufflePolicy for FisherYates {
    fn shuffle(&self, pairs: &mut [PairId], rng: &mut GameRng) {
        rng.shuffle(pairs);
    }
}

/// Leaves the dealt order untouched: `1, 2, .., N, 1, 2, .., N`.
///
/// Useful for tutorials and reproducible demos.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeepOrder;

impl ShufflePolicy for KeepOrder {
    fn shuffle(&self, _pairs: &mut [PairId], _rng: &mut GameRng) {}
}

// =============================================================================
// Deck
// =============================================================================

/// An ordered sequence of `2 * pair_count` cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    pair_count: usize,
    cards: Vector<Card>,
}

impl Deck {
    /// Deal a fresh face-down deck.
    ///
    /// Fails with `InvalidConfiguration` for a pair count of zero or above
    /// `MAX_PAIR_COUNT`.
    pub fn deal(
        pair_count: usize,
        policy: &dyn ShufflePolicy,
        rng: &mut GameRng,
    ) -> Result<Self, GameError> {
        validate_pair_count(pair_count)?;

        let mut pairs: Vec<PairId> = (0..pair_count * 2)
            .map(|i| PairId::new((i % pair_count) as u32 + 1))
            .collect();
        policy.shuffle(&mut pairs, rng);

        let cards = pairs
            .into_iter()
            .enumerate()
            .map(|(i, pair)| Card::new(CardIndex::new(i), pair))
            .collect();

        Ok(Self { pair_count, cards })
    }

    /// Number of distinct pairs.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get a card by grid position.
    #[must_use]
    pub fn get(&self, index: CardIndex) -> Option<&Card> {
        self.cards.get(index.0)
    }

    /// Get a card, or `CardOutOfRange` if the index is past the end.
    pub fn card(&self, index: CardIndex) -> Result<&Card, GameError> {
        self.get(index).ok_or(GameError::CardOutOfRange {
            index,
            len: self.len(),
        })
    }

    /// Iterate over cards in grid order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cards.iter()
    }

    /// Pair ids in grid order.
    #[must_use]
    pub fn pair_ids(&self) -> Vec<PairId> {
        self.cards.iter().map(|c| c.pair).collect()
    }

    /// How many cards carry each pair id.
    #[must_use]
    pub fn pair_counts(&self) -> FxHashMap<PairId, usize> {
        let mut counts = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(card.pair).or_insert(0) += 1;
        }
        counts
    }

    /// Number of cards in the `Matched` state.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched()).count()
    }

    /// True iff every card is matched.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }

    /// Set a card's state. Out-of-range indices are ignored.
    pub(crate) fn set_state(&mut self, index: CardIndex, state: CardState) {
        if let Some(card) = self.cards.get_mut(index.0) {
            card.state = state;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal(pair_count: usize, seed: u64) -> Deck {
        Deck::deal(pair_count, &FisherYates, &mut GameRng::new(seed)).unwrap()
    }

    #[test]
    fn test_deal_size_and_pairs() {
        let deck = deal(12, 42);

        assert_eq!(deck.len(), 24);
        assert_eq!(deck.pair_count(), 12);

        let counts = deck.pair_counts();
        assert_eq!(counts.len(), 12);
        for id in 1..=12 {
            assert_eq!(counts.get(&PairId::new(id)), Some(&2));
        }
    }

    #[test]
    fn test_deal_all_face_down_with_grid_indices() {
        let deck = deal(5, 1);

        for (i, card) in deck.iter().enumerate() {
            assert_eq!(card.index, CardIndex::new(i));
            assert_eq!(card.state, CardState::FaceDown);
        }
        assert_eq!(deck.matched_count(), 0);
        assert!(!deck.all_matched());
    }

    #[test]
    fn test_keep_order() {
        let deck = Deck::deal(3, &KeepOrder, &mut GameRng::new(0)).unwrap();
        let ids: Vec<u32> = deck.pair_ids().into_iter().map(PairId::raw).collect();
        assert_eq!(ids, vec![1, 2, 3, 1, 2, 3]);
    }

    #[test]
    fn test_same_seed_same_deal() {
        assert_eq!(deal(12, 7).pair_ids(), deal(12, 7).pair_ids());
        assert_ne!(deal(12, 7).pair_ids(), deal(12, 8).pair_ids());
    }

    #[test]
    fn test_zero_pairs_rejected() {
        let result = Deck::deal(0, &FisherYates, &mut GameRng::new(0));
        assert!(matches!(
            result,
            Err(GameError::InvalidConfiguration { pair_count: 0, .. })
        ));
    }

    #[test]
    fn test_card_lookup() {
        let deck = deal(2, 3);

        assert!(deck.card(CardIndex::new(3)).is_ok());
        assert_eq!(
            deck.card(CardIndex::new(4)),
            Err(GameError::CardOutOfRange {
                index: CardIndex::new(4),
                len: 4
            })
        );
        assert!(deck.get(CardIndex::new(99)).is_none());
    }

    #[test]
    fn test_set_state_and_all_matched() {
        let mut deck = deal(1, 0);

        deck.set_state(CardIndex::new(0), CardState::Matched);
        assert_eq!(deck.matched_count(), 1);
        assert!(!deck.all_matched());

        deck.set_state(CardIndex::new(1), CardState::Matched);
        assert!(deck.all_matched());

        // Ignored
        deck.set_state(CardIndex::new(2), CardState::Selected);
        assert_eq!(deck.len(), 2);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut deck = deal(2, 0);
        let snapshot = deck.clone();

        deck.set_state(CardIndex::new(0), CardState::Selected);

        assert_eq!(snapshot.get(CardIndex::new(0)).unwrap().state, CardState::FaceDown);
        assert_eq!(deck.get(CardIndex::new(0)).unwrap().state, CardState::Selected);
    }
}

//! Card system: identity, state, and dealing.
//!
//! ## Key Types
//!
//! - `CardIndex`: Grid position of a dealt card
//! - `PairId`: Identifier shared by the two cards of a pair
//! - `CardState`: FaceDown, Selected, or Matched
//! - `Deck`: The dealt cards, in grid order
//! - `ShufflePolicy`: How pair ids are ordered at deal time

pub mod card;
pub mod deck;

pub use card::{Card, CardIndex, CardState, PairId};
pub use deck::{Deck, FisherYates, KeepOrder, ShufflePolicy};

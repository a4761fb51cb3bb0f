//! Engine error type.

use thiserror::Error;

use crate::cards::CardIndex;

/// Errors surfaced at the engine boundary.
///
/// Gameplay itself never fails: clicks on resolved cards are ignored, not
/// rejected. Errors only arise from bad configuration or from a host
/// addressing a card slot that does not exist.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid configuration: pair count {pair_count} (expected 1..={max})")]
    InvalidConfiguration { pair_count: usize, max: usize },

    #[error("card {index} out of range for a deck of {len} cards")]
    CardOutOfRange { index: CardIndex, len: usize },
}

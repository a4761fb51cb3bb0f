//! The pairs game engine.

use std::time::{Duration, SystemTime};

use tracing::{debug, info, trace};

use crate::cards::{Card, CardIndex, CardState, Deck, FisherYates, ShufflePolicy};
use crate::core::clock::format_elapsed;
use crate::core::config::validate_pair_count;
use crate::core::{Clock, GameConfig, GameError, GameRng, GameRngState, SystemClock};
use crate::events::{GameEvent, IgnoreReason};
use crate::view::BoardView;

use super::session::Session;

/// A single pairs game.
///
/// Owns the deck, the session counters, and the dealing RNG. Driven by
/// discrete calls from a host: `click` per card click, `reset` for the reset
/// control, and `elapsed_text` per timer tick. Each mutating call returns
/// the events it produced.
pub struct MemoryGame {
    config: GameConfig,
    deck: Deck,
    session: Session,
    rng: GameRng,
    shuffle: Box<dyn ShufflePolicy>,
    clock: Box<dyn Clock>,
}

/// Builder for creating a `MemoryGame`.
pub struct MemoryGameBuilder {
    config: GameConfig,
    shuffle: Box<dyn ShufflePolicy>,
    clock: Box<dyn Clock>,
    rng_state: Option<GameRngState>,
}

impl Default for MemoryGameBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            rng_state: None,
            shuffle: Box::new(FisherYates),
            clock: Box::new(SystemClock),
        }
    }
}

impl MemoryGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn pair_count(mut self, count: usize) -> Self {
        self.config.pair_count = count;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn auto_reset_on_win(mut self, enabled: bool) -> Self {
        self.config.auto_reset_on_win = enabled;
        self
    }

    pub fn shuffle(mut self, policy: impl ShufflePolicy + 'static) -> Self {
        self.shuffle = Box::new(policy);
        self
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Resume dealing from a state captured with `MemoryGame::rng_state`.
    ///
    /// Takes precedence over `seed`: the first deck is the one the captured
    /// game would have dealt on its next reset.
    pub fn rng_state(mut self, state: GameRngState) -> Self {
        self.rng_state = Some(state);
        self
    }

    /// Validate the configuration and deal the first deck.
    pub fn build(self) -> Result<MemoryGame, GameError> {
        self.config.validate()?;

        let mut rng = match (&self.rng_state, self.config.seed) {
            (Some(state), _) => GameRng::from_state(state),
            (None, Some(seed)) => GameRng::new(seed),
            (None, None) => GameRng::from_entropy(),
        };
        let deck = Deck::deal(self.config.pair_count, self.shuffle.as_ref(), &mut rng)?;
        info!(
            pair_count = self.config.pair_count,
            seed = rng.seed(),
            "dealt first deck"
        );

        Ok(MemoryGame {
            config: self.config,
            deck,
            session: Session::new(),
            rng,
            shuffle: self.shuffle,
            clock: self.clock,
        })
    }
}

impl MemoryGame {
    /// Create a game with `pair_count` pairs, a uniform shuffle, and the
    /// system clock.
    pub fn new(pair_count: usize) -> Result<Self, GameError> {
        MemoryGameBuilder::new().pair_count(pair_count).build()
    }

    /// Get a builder for a customised game.
    pub fn builder() -> MemoryGameBuilder {
        MemoryGameBuilder::new()
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.session.attempts
    }

    /// Currently selected cards, in pick order.
    #[must_use]
    pub fn selection(&self) -> &[CardIndex] {
        self.session.selection()
    }

    /// When the first click of this deal happened.
    #[must_use]
    pub fn started_at(&self) -> Option<SystemTime> {
        self.session.started_at
    }

    /// Get a card by grid position.
    #[must_use]
    pub fn card(&self, index: CardIndex) -> Option<&Card> {
        self.deck.get(index)
    }

    /// True iff every card is matched.
    ///
    /// With auto-reset enabled this is never observed true between calls,
    /// since the winning click deals a new deck.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.deck.all_matched()
    }

    /// Dealing RNG state. Pass it to `MemoryGameBuilder::rng_state` to
    /// replay the sequence of future deals.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    // === Timer ===

    /// Time since the first click of this deal; zero before it.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.session.elapsed(self.clock.now())
    }

    /// Elapsed time as `MM:SS`; `"00:00"` before the first click.
    ///
    /// Read-only: safe to call from a periodic tick at any point.
    #[must_use]
    pub fn elapsed_text(&self) -> String {
        format_elapsed(self.elapsed())
    }

    /// Render-ready snapshot of the board and counters.
    #[must_use]
    pub fn view(&self) -> BoardView {
        BoardView::capture(self)
    }

    // === Operations ===

    /// Discard the current deck and deal a new one with the configured
    /// pair count. Clears the selection, attempts, and timer.
    pub fn reset(&mut self) -> Result<GameEvent, GameError> {
        self.deal()
    }

    /// Like `reset`, but with a new pair count that sticks for later deals.
    ///
    /// An invalid count leaves the current game untouched.
    pub fn reset_with(&mut self, pair_count: usize) -> Result<GameEvent, GameError> {
        validate_pair_count(pair_count)?;
        self.config.pair_count = pair_count;
        self.deal()
    }

    fn deal(&mut self) -> Result<GameEvent, GameError> {
        self.deck = Deck::deal(self.config.pair_count, self.shuffle.as_ref(), &mut self.rng)?;
        self.session = Session::new();
        info!(pair_count = self.config.pair_count, "dealt new deck");
        Ok(GameEvent::Dealt {
            pair_count: self.config.pair_count,
        })
    }

    /// Handle a click on the card at `index`.
    ///
    /// 1. The first click of a deal starts the timer.
    /// 2. If a mismatch is showing, both cards turn face down and the click
    ///    is consumed; the clicked card is not selected.
    /// 3. Clicks on matched or already-selected cards are ignored.
    /// 4. With nothing selected, the card becomes the first pick.
    /// 5. Otherwise it is the second pick: a match locks both cards, a
    ///    mismatch leaves both face up and counts an attempt.
    /// 6. Matching the last pair emits `Won` and, if configured, deals anew.
    ///
    /// Only an out-of-range `index` is an error.
    pub fn click(&mut self, index: CardIndex) -> Result<Vec<GameEvent>, GameError> {
        let clicked = *self.deck.card(index)?;
        let mut events = Vec::new();

        if self.session.start_timer(self.clock.now()) {
            debug!("timer started");
            events.push(GameEvent::TimerStarted);
        }

        if let Some((first, second)) = self.session.showing_mismatch() {
            self.deck.set_state(first, CardState::FaceDown);
            self.deck.set_state(second, CardState::FaceDown);
            self.session.clear_selection();
            debug!(%first, %second, absorbed = %index, "mismatch cleared");
            events.push(GameEvent::SelectionCleared { first, second });
            return Ok(events);
        }

        let reason = match clicked.state {
            CardState::Matched => Some(IgnoreReason::AlreadyMatched),
            CardState::Selected => Some(IgnoreReason::AlreadySelected),
            CardState::FaceDown => None,
        };
        if let Some(reason) = reason {
            trace!(card = %index, ?reason, "click ignored");
            events.push(GameEvent::ClickIgnored { card: index, reason });
            return Ok(events);
        }

        let Some(first) = self.session.first_pick() else {
            self.deck.set_state(index, CardState::Selected);
            self.session.select(index);
            debug!(card = %index, "first pick");
            events.push(GameEvent::CardSelected { card: index });
            return Ok(events);
        };

        let first_card = *self.deck.card(first)?;
        if first_card.pairs_with(&clicked) {
            self.deck.set_state(first, CardState::Matched);
            self.deck.set_state(index, CardState::Matched);
            self.session.clear_selection();
            debug!(%first, second = %index, pair = %clicked.pair, "pair matched");
            events.push(GameEvent::PairMatched {
                first,
                second: index,
            });

            // Only a match can complete the board.
            if self.deck.all_matched() {
                self.finish(&mut events)?;
            }
        } else {
            self.deck.set_state(index, CardState::Selected);
            self.session.select(index);
            self.session.attempts += 1;
            debug!(%first, second = %index, attempts = self.session.attempts, "pair mismatched");
            events.push(GameEvent::PairMismatched {
                first,
                second: index,
                attempts: self.session.attempts,
            });
        }

        Ok(events)
    }

    fn finish(&mut self, events: &mut Vec<GameEvent>) -> Result<(), GameError> {
        let attempts = self.session.attempts;
        let elapsed = self.elapsed_text();
        info!(attempts, %elapsed, "game won");
        events.push(GameEvent::Won { attempts, elapsed });

        if self.config.auto_reset_on_win {
            events.push(self.deal()?);
        }
        Ok(())
    }
}

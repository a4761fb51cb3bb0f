//! Property tests for dealing and click-stream invariants.

use proptest::prelude::*;

use memory_pairs::{CardIndex, CardState, GameEvent, ManualClock, MemoryGame, PairId};

fn seeded_game(pair_count: usize, seed: u64) -> MemoryGame {
    MemoryGame::builder()
        .pair_count(pair_count)
        .seed(seed)
        .clock(ManualClock::new())
        .build()
        .expect("valid config")
}

/// Board-level invariants that must hold between any two calls.
fn check_board(game: &MemoryGame) -> Result<(), TestCaseError> {
    let selection = game.selection();
    prop_assert!(selection.len() <= 2, "selection too large: {:?}", selection);

    for card in game.deck().iter() {
        let in_selection = selection.contains(&card.index);
        prop_assert_eq!(
            card.state == CardState::Selected,
            in_selection,
            "{} state {:?} disagrees with selection {:?}",
            card.index,
            card.state,
            selection
        );
    }

    // Two selected cards are always a mismatch
    if let [first, second] = selection {
        let a = game.card(*first).unwrap();
        let b = game.card(*second).unwrap();
        prop_assert_ne!(a.pair, b.pair);
    }

    // Matched cards come in whole pairs
    let counts = game.deck().pair_counts();
    for (pair, count) in counts {
        prop_assert_eq!(count, 2, "{} dealt {} times", pair, count);
        let matched = game
            .deck()
            .iter()
            .filter(|c| c.pair == pair && c.is_matched())
            .count();
        prop_assert!(matched == 0 || matched == 2, "{} half matched", pair);
    }
    Ok(())
}

proptest! {
    /// Property: every deal holds each pair id exactly twice, face down
    #[test]
    fn deal_invariants(pair_count in 1usize..40, seed in any::<u64>()) {
        let game = seeded_game(pair_count, seed);

        prop_assert_eq!(game.deck().len(), pair_count * 2);
        prop_assert_eq!(game.attempts(), 0);
        prop_assert_eq!(game.started_at(), None);
        prop_assert!(game.deck().iter().all(|c| c.state == CardState::FaceDown));

        let counts = game.deck().pair_counts();
        prop_assert_eq!(counts.len(), pair_count);
        for id in 1..=pair_count as u32 {
            prop_assert_eq!(counts.get(&PairId::new(id)).copied(), Some(2));
        }
    }

    /// Property: arbitrary click streams never break board invariants
    #[test]
    fn click_stream_invariants(
        pair_count in 1usize..6,
        seed in any::<u64>(),
        clicks in prop::collection::vec(0usize..12, 0..200)
    ) {
        let mut game = seeded_game(pair_count, seed);
        let len = game.deck().len();

        for raw in clicks {
            let index = CardIndex::new(raw % len);
            let attempts_before = game.attempts();
            let events = game.click(index).unwrap();

            let dealt = events.iter().any(|e| matches!(e, GameEvent::Dealt { .. }));
            let mismatched = events
                .iter()
                .any(|e| matches!(e, GameEvent::PairMismatched { .. }));

            if dealt {
                prop_assert_eq!(game.attempts(), 0);
            } else if mismatched {
                prop_assert_eq!(game.attempts(), attempts_before + 1);
            } else {
                prop_assert_eq!(game.attempts(), attempts_before);
            }

            let won = events
                .iter()
                .filter(|e| matches!(e, GameEvent::Won { .. }))
                .count();
            prop_assert!(won <= 1, "won fired {} times", won);
            check_board(&game)?;
        }
    }

    /// Property: re-clicking the lone selected card changes nothing
    #[test]
    fn reclick_is_noop(pair_count in 1usize..12, seed in any::<u64>(), pick in 0usize..24) {
        let mut game = seeded_game(pair_count, seed);
        let index = CardIndex::new(pick % game.deck().len());

        game.click(index).unwrap();
        let before = game.view();
        game.click(index).unwrap();
        let after = game.view();

        prop_assert_eq!(before, after);
        prop_assert_eq!(game.selection(), &[index][..]);
    }

    /// Property: matching every pair in order wins with zero attempts
    #[test]
    fn perfect_game_wins_once(pair_count in 1usize..12, seed in any::<u64>()) {
        let mut game = seeded_game(pair_count, seed);
        let cards: Vec<_> = game.deck().iter().copied().collect();

        let mut wins = Vec::new();
        for id in 1..=pair_count as u32 {
            let mut halves = cards.iter().filter(|c| c.pair == PairId::new(id));
            let first = halves.next().unwrap().index;
            let second = halves.next().unwrap().index;

            game.click(first).unwrap();
            for event in game.click(second).unwrap() {
                if let GameEvent::Won { attempts, elapsed } = event {
                    wins.push((attempts, elapsed));
                }
            }
        }

        prop_assert_eq!(wins, vec![(0, "00:00".to_string())]);
        prop_assert_eq!(game.deck().matched_count(), 0);
    }
}

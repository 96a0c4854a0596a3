//! Property-based tests for the engine.
//!
//! Random move sequences (legal or not) must keep the board and the
//! available set partitioned, keep the board monotonic and never move a
//! decided game.

use proptest::prelude::*;
use tictac_engine::{Coordinate, GameEngine, GameMode, Mark, MoveReport, Outcome};

fn arb_mark() -> impl Strategy<Value = Mark> {
    prop_oneof![Just(Mark::X), Just(Mark::O)]
}

fn arb_mode() -> impl Strategy<Value = GameMode> {
    prop_oneof![Just(GameMode::Single), Just(GameMode::Multiple)]
}

/// Up to 20 attempted moves, repeats and off-turn marks included.
fn arb_attempts() -> impl Strategy<Value = Vec<(usize, Mark)>> {
    prop::collection::vec((0usize..9, arb_mark()), 0..20)
}

proptest! {
    #[test]
    fn prop_board_and_available_stay_partitioned(
        mode in arb_mode(),
        human in arb_mark(),
        seed in any::<u64>(),
        attempts in arb_attempts(),
    ) {
        let mut engine = GameEngine::with_seed(mode, human, seed);

        for (index, mark) in attempts {
            let coord = Coordinate::from_index(index).unwrap();
            let before_board = engine.board().clone();
            let before_available = engine.available().len();
            let before_outcome = engine.outcome();

            match engine.apply_move(coord, mark) {
                MoveReport::Applied(_) => {
                    prop_assert!(!before_outcome.is_terminal());
                    prop_assert_eq!(engine.available().len(), before_available - 1);
                    for cell in before_board.cells() {
                        if let Some(m) = cell.mark() {
                            prop_assert_eq!(engine.board().get(cell.coord()), Some(m));
                        }
                    }
                }
                MoveReport::Ignored(_) => {
                    prop_assert_eq!(engine.board(), &before_board);
                    prop_assert_eq!(engine.available().len(), before_available);
                    prop_assert_eq!(engine.outcome(), before_outcome);
                }
            }

            if engine.awaiting_computer_reply() {
                prop_assert!(engine.apply_computer_move().is_ok());
            }

            prop_assert_eq!(
                engine.available().len() + engine.board().occupied_count(),
                9
            );
            prop_assert!(engine.verify().is_ok());
        }
    }

    #[test]
    fn prop_terminal_outcome_is_final(
        seed in any::<u64>(),
        human in arb_mark(),
        extra in arb_attempts(),
    ) {
        let mut engine = GameEngine::with_seed(GameMode::Single, human, seed);
        while !engine.outcome().is_terminal() {
            let coord = engine.available().as_slice()[0];
            engine.apply_move(coord, human);
            if engine.awaiting_computer_reply() {
                engine.apply_computer_move().unwrap();
            }
        }
        let decided = engine.outcome();
        let board = engine.board().clone();

        for (index, mark) in extra {
            let coord = Coordinate::from_index(index).unwrap();
            prop_assert!(!engine.apply_move(coord, mark).is_applied());
            prop_assert!(engine.apply_computer_move().is_err());
        }

        prop_assert_eq!(engine.outcome(), decided);
        prop_assert_eq!(engine.board(), &board);
    }

    #[test]
    fn prop_reset_always_restores_empty_game(
        mode in arb_mode(),
        seed in any::<u64>(),
        attempts in arb_attempts(),
    ) {
        let mut engine = GameEngine::with_seed(mode, Mark::X, seed);
        for (index, mark) in attempts {
            engine.apply_move(Coordinate::from_index(index).unwrap(), mark);
            if engine.awaiting_computer_reply() {
                engine.apply_computer_move().unwrap();
            }
        }

        engine.reset();

        prop_assert_eq!(engine.board().occupied_count(), 0);
        prop_assert_eq!(engine.available().len(), 9);
        prop_assert_eq!(engine.outcome(), Outcome::None);
        prop_assert!(!engine.awaiting_computer_reply());
        prop_assert_eq!(engine.pending_reply(), None);
    }
}

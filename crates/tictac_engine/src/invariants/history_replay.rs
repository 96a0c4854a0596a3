//! History invariant: the board is exactly the replay of the move history.

use super::Invariant;
use crate::board::Board;
use crate::engine::GameEngine;

/// Invariant: cells are monotonic and accounted for by the history.
///
/// Replaying the history onto an empty board must never hit an occupied
/// cell and must reproduce the current board.
pub struct HistoryReplayInvariant;

impl Invariant<GameEngine> for HistoryReplayInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let mut reconstructed = Board::empty();

        for mov in engine.history() {
            if !reconstructed.place(mov.coord, mov.mark) {
                return false;
            }
        }

        reconstructed == *engine.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic and match the move history"
    }
}

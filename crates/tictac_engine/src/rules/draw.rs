//! Draw detection logic for tic-tac-toe.

use crate::board::Board;
use tracing::instrument;

/// Checks if every cell holds a mark.
///
/// A full board after win detection found nothing is a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().all(|cell| !cell.is_empty())
}

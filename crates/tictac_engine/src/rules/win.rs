//! Win detection seeded at the latest placement.

use crate::board::{Board, Cell};
use crate::outcome::{LineKind, WinningLine};
use crate::types::{Coordinate, DIMENSION, Mark};
use tracing::{instrument, trace};

/// Looks for a completed line of `mark` through the cell just played at `at`.
///
/// Checks the row, the column, the main diagonal and the anti-diagonal in
/// that order. Later lines are not inspected once one is complete.
#[instrument(skip(board))]
pub fn find_winning_line(board: &Board, at: Coordinate, mark: Mark) -> Option<WinningLine> {
    complete(LineKind::Row(at.row()), board.row(at.row()), mark)
        .or_else(|| complete(LineKind::Column(at.col()), board.column(at.col()), mark))
        .or_else(|| complete(LineKind::Diagonal, board.diagonal(), mark))
        .or_else(|| complete(LineKind::AntiDiagonal, board.anti_diagonal(), mark))
}

/// The line as a [`WinningLine`] if every cell in it holds `mark`.
fn complete<'a>(
    kind: LineKind,
    cells: impl Iterator<Item = &'a Cell>,
    mark: Mark,
) -> Option<WinningLine> {
    let filled: Vec<Coordinate> = cells
        .filter(|cell| cell.mark() == Some(mark))
        .map(|cell| cell.coord())
        .collect();
    let coords = <[Coordinate; DIMENSION]>::try_from(filled).ok()?;
    trace!(%kind, "Line completed");
    Some(WinningLine::new(kind, coords))
}

//! Partition invariant: every cell is either open or occupied, never both.

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::{Coordinate, DIMENSION};

/// Invariant: the available set is exactly the set of empty cells.
pub struct PartitionInvariant;

impl Invariant<GameEngine> for PartitionInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board();
        let available = engine.available();

        let matches = Coordinate::ALL
            .iter()
            .all(|&coord| board.is_empty(coord) == available.contains(coord));

        matches && available.len() + board.occupied_count() == DIMENSION * DIMENSION
    }

    fn description() -> &'static str {
        "Available set and empty cells form a partition of the board"
    }
}

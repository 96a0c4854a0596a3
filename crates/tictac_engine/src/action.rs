//! First-class move types.
//!
//! Moves are domain events: they go into the engine's history, can be
//! replayed onto an empty board and show up in logs.

use crate::outcome::Outcome;
use crate::types::{Coordinate, Mark};
use serde::{Deserialize, Serialize};

/// A mark placed at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark placed.
    pub mark: Mark,
    /// Where it was placed.
    pub coord: Coordinate,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, coord: Coordinate) -> Self {
        Self { mark, coord }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> {}", self.mark, self.coord)
    }
}

/// Why a move was refused without changing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum IgnoreReason {
    /// The cell already holds a mark.
    #[display("cell {_0} is already occupied")]
    Occupied(Coordinate),
    /// The game has been won, lost or drawn.
    #[display("the game is already over")]
    GameOver,
    /// The computer's reply has not been played yet.
    #[display("waiting for the computer's reply")]
    AwaitingComputer,
}

/// What happened to a submitted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveReport {
    /// The mark was placed; carries the resulting outcome.
    Applied(Outcome),
    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl MoveReport {
    /// True if the move changed the board.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveReport::Applied(_))
    }
}

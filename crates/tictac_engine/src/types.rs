//! Core domain types: marks, coordinates and game modes.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the board.
pub const DIMENSION: usize = 3;

/// A player's symbol.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Crosses.
    #[serde(alias = "x")]
    X,
    /// Noughts.
    #[serde(alias = "o")]
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// Who the human is playing against.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum GameMode {
    /// Human against the randomized computer.
    #[default]
    Single,
    /// Two humans sharing the board, switching the active player by hand.
    Multiple,
}

/// A board position, `(row, col)` with both in `0..DIMENSION`.
///
/// Only [`Coordinate::new`] (or deserialization, which goes through it) can
/// build one, so every `Coordinate` in circulation is on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Coordinate {
    row: usize,
    col: usize,
}

impl Coordinate {
    /// All nine coordinates in row-major order.
    pub const ALL: [Coordinate; DIMENSION * DIMENSION] = [
        Coordinate::at(0, 0),
        Coordinate::at(0, 1),
        Coordinate::at(0, 2),
        Coordinate::at(1, 0),
        Coordinate::at(1, 1),
        Coordinate::at(1, 2),
        Coordinate::at(2, 0),
        Coordinate::at(2, 1),
        Coordinate::at(2, 2),
    ];

    const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates a coordinate, failing if either index is off the board.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, EngineError> {
        if row >= DIMENSION || col >= DIMENSION {
            return Err(EngineError::OutOfBounds { row, col });
        }
        Ok(Self::at(row, col))
    }

    /// Creates a coordinate from a row-major index (0-8).
    pub fn from_index(index: usize) -> Result<Self, EngineError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(EngineError::OutOfBounds {
                row: index / DIMENSION,
                col: index % DIMENSION,
            })
    }

    /// Row index.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index.
    pub fn col(self) -> usize {
        self.col
    }

}

impl TryFrom<(usize, usize)> for Coordinate {
    type Error = EngineError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (usize, usize) {
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_new_rejects_out_of_bounds() {
        assert!(Coordinate::new(2, 2).is_ok());
        assert_eq!(
            Coordinate::new(3, 0),
            Err(EngineError::OutOfBounds { row: 3, col: 0 })
        );
        assert!(Coordinate::new(0, 3).is_err());
    }

    #[test]
    fn test_from_index_follows_row_major_order() {
        for (i, coord) in Coordinate::ALL.iter().enumerate() {
            assert_eq!(Coordinate::from_index(i), Ok(*coord));
            assert_eq!(coord.row() * DIMENSION + coord.col(), i);
        }
        assert!(Coordinate::from_index(9).is_err());
    }

    #[test]
    fn test_mark_parsing_is_case_insensitive() {
        assert_eq!(Mark::from_str("x"), Ok(Mark::X));
        assert_eq!(Mark::from_str("O"), Ok(Mark::O));
        assert!(Mark::from_str("z").is_err());
        assert_eq!(Mark::X.opponent(), Mark::O);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!(GameMode::from_str("single"), Ok(GameMode::Single));
        assert_eq!(GameMode::from_str("Multiple"), Ok(GameMode::Multiple));
        assert_eq!(GameMode::Multiple.to_string(), "multiple");
    }
}

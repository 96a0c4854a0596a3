//! Game outcomes and completed lines.

use crate::types::{Coordinate, DIMENSION, Mark};
use serde::{Deserialize, Serialize};

/// Which of the eight lines was completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum LineKind {
    /// A horizontal line.
    #[display("row {_0}")]
    Row(usize),
    /// A vertical line.
    #[display("column {_0}")]
    Column(usize),
    /// Top-left to bottom-right.
    #[display("diagonal")]
    Diagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

/// The three coordinates of a completed line, in board order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine {
    kind: LineKind,
    coords: [Coordinate; DIMENSION],
}

impl WinningLine {
    pub(crate) fn new(kind: LineKind, coords: [Coordinate; DIMENSION]) -> Self {
        Self { kind, coords }
    }

    /// Which line this is.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// The coordinates, for highlighting.
    pub fn coords(&self) -> &[Coordinate; DIMENSION] {
        &self.coords
    }

    /// True if `coord` is part of the line.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.coords.contains(&coord)
    }
}

impl std::fmt::Display for WinningLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.coords;
        write!(f, "{} {} {} {}", self.kind, a, b, c)
    }
}

/// Classification of the game after the latest move.
///
/// `Win` and `Loss` are relative to the human player. `NeedsPlayerChange` is
/// an advisory from two-player mode: the same mark moved twice in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// Still playing.
    #[default]
    None,
    /// The human completed a line.
    Win {
        /// The human's mark.
        mark: Mark,
        /// The completed line.
        line: WinningLine,
    },
    /// The other side completed a line.
    Loss {
        /// The winning (non-human) mark.
        mark: Mark,
        /// The completed line.
        line: WinningLine,
    },
    /// Every cell is taken and no line was completed.
    Draw,
    /// Two-player mode: the same mark was played twice without switching.
    NeedsPlayerChange,
}

impl Outcome {
    /// True for Win, Loss and Draw; no further moves are accepted.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Outcome::Win { .. } | Outcome::Loss { .. } | Outcome::Draw)
    }

    /// The completed line for Win or Loss.
    pub fn winning_line(&self) -> Option<&WinningLine> {
        match self {
            Outcome::Win { line, .. } | Outcome::Loss { line, .. } => Some(line),
            _ => None,
        }
    }

    /// Message shown to the player, if the outcome has one.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Outcome::None => None,
            Outcome::Win { .. } => Some("Congrats! You won!"),
            Outcome::Loss { .. } => Some("Sorry, you've lost :("),
            Outcome::Draw => Some("Draw ¯\\_(ツ)_/¯"),
            Outcome::NeedsPlayerChange => Some("Please choose another player"),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::None => write!(f, "In progress"),
            Outcome::Win { mark, line } => write!(f, "{:?} wins on {}", mark, line),
            Outcome::Loss { mark, line } => write!(f, "{:?} wins on {}", mark, line),
            Outcome::Draw => write!(f, "Draw"),
            Outcome::NeedsPlayerChange => write!(f, "Player change needed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn top_row() -> WinningLine {
        WinningLine::new(
            LineKind::Row(0),
            [Coordinate::ALL[0], Coordinate::ALL[1], Coordinate::ALL[2]],
        )
    }

    #[test]
    fn test_terminal_classification() {
        let line = top_row();
        assert!(!Outcome::None.is_terminal());
        assert!(!Outcome::NeedsPlayerChange.is_terminal());
        assert!(Outcome::Draw.is_terminal());
        assert!(Outcome::Win { mark: Mark::X, line }.is_terminal());
        assert!(Outcome::Loss { mark: Mark::O, line }.is_terminal());
    }

    #[test]
    fn test_winning_line_only_on_win_or_loss() {
        let line = top_row();
        assert_eq!(Outcome::Loss { mark: Mark::O, line }.winning_line(), Some(&line));
        assert_eq!(Outcome::Draw.winning_line(), None);
        assert_eq!(Outcome::NeedsPlayerChange.winning_line(), None);
    }

    #[test]
    fn test_messages() {
        let line = top_row();
        assert_eq!(Outcome::None.message(), None);
        assert_eq!(
            Outcome::Win { mark: Mark::X, line }.message(),
            Some("Congrats! You won!")
        );
        assert!(Outcome::Draw.message().unwrap().starts_with("Draw"));
    }

    #[test]
    fn test_line_display() {
        assert_eq!(top_row().to_string(), "row 0 (0, 0) (0, 1) (0, 2)");
    }
}

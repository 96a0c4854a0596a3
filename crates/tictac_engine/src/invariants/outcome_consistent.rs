//! Outcome invariant: the recorded outcome agrees with the board.

use super::Invariant;
use crate::engine::GameEngine;
use crate::outcome::Outcome;

/// Invariant: a decided game owes no reply, a winning line is really
/// filled by its mark, and a draw only happens on a full board.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameEngine> for OutcomeConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let outcome = engine.outcome();

        if outcome.is_terminal() && engine.awaiting_computer_reply() {
            return false;
        }

        match outcome {
            Outcome::Win { mark, line } | Outcome::Loss { mark, line } => line
                .coords()
                .iter()
                .all(|&coord| engine.board().get(coord) == Some(mark)),
            Outcome::Draw => engine.available().is_empty(),
            Outcome::None | Outcome::NeedsPlayerChange => true,
        }
    }

    fn description() -> &'static str {
        "Outcome is consistent with the board and pending reply"
    }
}

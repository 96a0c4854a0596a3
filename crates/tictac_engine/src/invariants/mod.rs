//! First-class invariants for the engine.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. They are checked in debug builds and can be tested independently.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod history_replay;
pub mod outcome_consistent;
pub mod partition;

pub use history_replay::HistoryReplayInvariant;
pub use outcome_consistent::OutcomeConsistentInvariant;
pub use partition::PartitionInvariant;

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    PartitionInvariant,
    HistoryReplayInvariant,
    OutcomeConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coordinate, GameEngine, GameMode, Mark};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let engine = GameEngine::with_seed(GameMode::Single, Mark::X, 0);
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut engine = GameEngine::with_seed(GameMode::Multiple, Mark::X, 0);
        for (i, coord) in Coordinate::ALL.into_iter().take(5).enumerate() {
            let mark = if i % 2 == 0 { Mark::X } else { Mark::O };
            engine.apply_move(coord, mark);
        }
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }
}

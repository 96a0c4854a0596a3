//! Engine error types.

/// Contract violations reported by the engine.
///
/// Rejected human moves (occupied cell, finished game, reply pending) are not
/// errors; they come back as [`crate::MoveReport::Ignored`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum EngineError {
    /// A coordinate was built from indices outside the board.
    #[display("Coordinate ({row}, {col}) is off the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// A computer move was requested outside single-player mode.
    #[display("Computer moves only exist in single-player mode")]
    NotSingleMode,

    /// A computer move was requested while none was awaited.
    #[display("No computer reply is pending")]
    NoReplyPending,

    /// The game has already been decided.
    #[display("Game is already over")]
    GameOver,

    /// A reply ticket was issued for a game that has since been reset.
    #[display("Reply ticket for game {ticket} is stale (current game is {current})")]
    StaleReply {
        /// Epoch the ticket was issued for.
        ticket: u64,
        /// Epoch of the current game.
        current: u64,
    },

    /// Engine state failed a consistency check.
    #[display("Invariant violation: {_0}")]
    InvariantViolation(#[error(not(source))] String),
}

//! Tic-tac-toe game-state engine.
//!
//! The engine owns the board, the set of open cells, the outcome and the
//! bookkeeping for a delayed computer reply. It owns no timer: the caller
//! decides when to run the computer's move and uses a [`ReplyTicket`] so a
//! reply scheduled before [`GameEngine::reset`] can never land on the new game.
//!
//! # Example
//!
//! ```
//! use tictac_engine::{Coordinate, GameEngine, GameMode, Mark, Outcome};
//!
//! # fn main() -> Result<(), tictac_engine::EngineError> {
//! let mut engine = GameEngine::with_seed(GameMode::Multiple, Mark::X, 7);
//! for col in 0..3 {
//!     engine.apply_move(Coordinate::new(0, col)?, Mark::X);
//! }
//! assert!(matches!(engine.outcome(), Outcome::Win { mark: Mark::X, .. }));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod engine;
mod error;
mod invariants;
mod outcome;
mod rng;
mod rules;
mod types;

pub use action::{IgnoreReason, Move, MoveReport};
pub use board::{AvailableSet, Board, Cell};
pub use engine::{GameEngine, ReplyTicket};
pub use error::EngineError;
pub use invariants::{
    EngineInvariants, HistoryReplayInvariant, Invariant, InvariantSet, InvariantViolation,
    OutcomeConsistentInvariant, PartitionInvariant,
};
pub use outcome::{LineKind, Outcome, WinningLine};
pub use rng::ReplyRng;
pub use rules::{find_winning_line, is_full};
pub use types::{Coordinate, GameMode, Mark, DIMENSION};

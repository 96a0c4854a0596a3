//! The game-state engine.
//!
//! [`GameEngine`] is mutated in place by moves and replaced wholesale by
//! [`GameEngine::reset`]. In single-player mode every accepted human move
//! that leaves the game open sets `awaiting_computer_reply`; the caller waits
//! out its delay and then calls [`GameEngine::apply_scheduled_reply`] with the
//! [`ReplyTicket`] it took when scheduling.

use crate::action::{IgnoreReason, Move, MoveReport};
use crate::board::{AvailableSet, Board};
use crate::error::EngineError;
use crate::invariants::{EngineInvariants, InvariantSet};
use crate::outcome::{Outcome, WinningLine};
use crate::rng::ReplyRng;
use crate::rules::{find_winning_line, is_full};
use crate::types::{Coordinate, GameMode, Mark};
use tracing::{debug, info, instrument, warn};

/// Identifies the game a scheduled computer reply belongs to.
///
/// Every reset moves the engine to a new epoch, so a ticket taken before the
/// reset is refused afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReplyTicket {
    epoch: u64,
}

impl ReplyTicket {
    /// The game epoch this ticket was issued for.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

/// Tic-tac-toe engine for one play session.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    available: AvailableSet,
    mode: GameMode,
    human_mark: Mark,
    awaiting_computer_reply: bool,
    outcome: Outcome,
    last_mover: Option<Mark>,
    history: Vec<Move>,
    epoch: u64,
    rng: ReplyRng,
}

impl GameEngine {
    /// Creates an engine whose computer moves are seeded from the OS.
    #[instrument]
    pub fn new(mode: GameMode, human_mark: Mark) -> Self {
        Self::with_rng(mode, human_mark, ReplyRng::from_entropy())
    }

    /// Creates an engine with reproducible computer moves.
    #[instrument]
    pub fn with_seed(mode: GameMode, human_mark: Mark, seed: u64) -> Self {
        Self::with_rng(mode, human_mark, ReplyRng::seeded(seed))
    }

    /// Creates an engine around an existing RNG.
    pub fn with_rng(mode: GameMode, human_mark: Mark, rng: ReplyRng) -> Self {
        Self {
            board: Board::empty(),
            available: AvailableSet::full(),
            mode,
            human_mark,
            awaiting_computer_reply: false,
            outcome: Outcome::None,
            last_mover: None,
            history: Vec::new(),
            epoch: 0,
            rng,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Configuration
    // ─────────────────────────────────────────────────────────────

    /// Sets the game mode and the active (human) player.
    ///
    /// Changing the mode starts a fresh game. In two-player mode, selecting a
    /// mark other than the last mover clears a pending player-change advisory.
    #[instrument(skip(self), fields(old_mode = ?self.mode, old_mark = ?self.human_mark))]
    pub fn configure(&mut self, mode: GameMode, human_mark: Mark) {
        self.human_mark = human_mark;

        if mode != self.mode {
            info!("Mode changed, starting a new game");
            self.mode = mode;
            self.reset();
            return;
        }

        if self.mode == GameMode::Multiple
            && self.outcome == Outcome::NeedsPlayerChange
            && self.last_mover != Some(human_mark)
        {
            debug!("Player switched, clearing change advisory");
            self.outcome = Outcome::None;
        }
    }

    /// Switches the active player without changing the mode.
    pub fn select_player(&mut self, mark: Mark) {
        self.configure(self.mode, mark);
    }

    // ─────────────────────────────────────────────────────────────
    //  Moves
    // ─────────────────────────────────────────────────────────────

    /// Places `mark` at `coord`.
    ///
    /// Refused without any state change if the game is decided, the computer
    /// still owes a reply, or the cell is taken.
    #[instrument(skip(self), fields(mode = ?self.mode, available = self.available.len()))]
    pub fn apply_move(&mut self, coord: Coordinate, mark: Mark) -> MoveReport {
        if self.outcome.is_terminal() {
            debug!("Move after game end ignored");
            return MoveReport::Ignored(IgnoreReason::GameOver);
        }
        if self.awaiting_computer_reply {
            debug!("Move while computer reply pending ignored");
            return MoveReport::Ignored(IgnoreReason::AwaitingComputer);
        }
        if !self.board.is_empty(coord) {
            debug!("Move on occupied cell ignored");
            return MoveReport::Ignored(IgnoreReason::Occupied(coord));
        }

        let outcome = self.place(coord, mark);

        if self.mode == GameMode::Single && outcome == Outcome::None && !self.available.is_empty() {
            debug!("Computer reply now pending");
            self.awaiting_computer_reply = true;
        }

        MoveReport::Applied(outcome)
    }

    /// Plays the computer's reply on a uniformly random open cell.
    ///
    /// # Errors
    ///
    /// - [`EngineError::NotSingleMode`] in two-player mode.
    /// - [`EngineError::GameOver`] once the game is decided.
    /// - [`EngineError::NoReplyPending`] if no human move is awaiting a reply.
    ///
    /// On error nothing changes.
    #[instrument(skip(self), fields(epoch = self.epoch, available = self.available.len()))]
    pub fn apply_computer_move(&mut self) -> Result<Coordinate, EngineError> {
        if self.mode != GameMode::Single {
            warn!("Computer move requested in two-player mode");
            return Err(EngineError::NotSingleMode);
        }
        if self.outcome.is_terminal() {
            warn!("Computer move requested after game end");
            return Err(EngineError::GameOver);
        }
        if !self.awaiting_computer_reply {
            warn!("Computer move requested with no reply pending");
            return Err(EngineError::NoReplyPending);
        }

        let coord = self.rng.pick(&self.available).ok_or(EngineError::GameOver)?;
        let mark = self.computer_mark();
        self.awaiting_computer_reply = false;
        let outcome = self.place(coord, mark);
        info!(%coord, ?mark, ?outcome, "Computer replied");

        Ok(coord)
    }

    /// Ticket for the reply the computer currently owes, if any.
    pub fn pending_reply(&self) -> Option<ReplyTicket> {
        self.awaiting_computer_reply.then_some(ReplyTicket { epoch: self.epoch })
    }

    /// Plays a reply that was scheduled with `ticket`.
    ///
    /// # Errors
    ///
    /// [`EngineError::StaleReply`] if the engine was reset after the ticket
    /// was taken, otherwise as for [`GameEngine::apply_computer_move`].
    #[instrument(skip(self), fields(current = self.epoch))]
    pub fn apply_scheduled_reply(&mut self, ticket: ReplyTicket) -> Result<Coordinate, EngineError> {
        if ticket.epoch != self.epoch {
            warn!(ticket = ticket.epoch, "Dropping reply scheduled for a previous game");
            return Err(EngineError::StaleReply {
                ticket: ticket.epoch,
                current: self.epoch,
            });
        }
        self.apply_computer_move()
    }

    /// Starts a fresh game in the current mode.
    ///
    /// Mode, active player and RNG are kept; any outstanding [`ReplyTicket`]
    /// goes stale.
    #[instrument(skip(self), fields(epoch = self.epoch, moves = self.history.len()))]
    pub fn reset(&mut self) {
        self.board = Board::empty();
        self.available = AvailableSet::full();
        self.awaiting_computer_reply = false;
        self.outcome = Outcome::None;
        self.last_mover = None;
        self.history = Vec::new();
        self.epoch = self.epoch.wrapping_add(1);
        info!(epoch = self.epoch, "Game reset");
    }

    /// Shared placement and evaluation for human and computer moves.
    fn place(&mut self, coord: Coordinate, mark: Mark) -> Outcome {
        self.board.place(coord, mark);
        self.available.remove(coord);
        self.history.push(Move::new(mark, coord));

        let outcome = if let Some(line) = find_winning_line(&self.board, coord, mark) {
            if mark == self.human_mark {
                Outcome::Win { mark, line }
            } else {
                Outcome::Loss { mark, line }
            }
        } else if is_full(&self.board) {
            Outcome::Draw
        } else if self.mode == GameMode::Multiple && self.last_mover == Some(mark) {
            Outcome::NeedsPlayerChange
        } else {
            Outcome::None
        };

        if outcome.is_terminal() {
            self.awaiting_computer_reply = false;
            info!(?outcome, "Game decided");
        }

        self.outcome = outcome;
        self.last_mover = Some(mark);

        debug_assert!(
            EngineInvariants::check_all(self).is_ok(),
            "Engine invariants violated after {:?} at {}",
            mark,
            coord
        );

        outcome
    }

    /// Checks every engine invariant.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvariantViolation`] listing each failed invariant.
    #[instrument(skip(self))]
    pub fn verify(&self) -> Result<(), EngineError> {
        EngineInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            EngineError::InvariantViolation(descriptions)
        })
    }

    // ─────────────────────────────────────────────────────────────
    //  Observables
    // ─────────────────────────────────────────────────────────────

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Coordinates still open.
    pub fn available(&self) -> &AvailableSet {
        &self.available
    }

    /// Outcome after the latest move.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The completed line, once the game is won or lost.
    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.outcome.winning_line()
    }

    /// Current game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// The human (active) player's mark.
    pub fn human_mark(&self) -> Mark {
        self.human_mark
    }

    /// The mark the computer plays in single-player mode.
    pub fn computer_mark(&self) -> Mark {
        self.human_mark.opponent()
    }

    /// Mark of the most recent move in this game.
    pub fn last_mover(&self) -> Option<Mark> {
        self.last_mover
    }

    /// True while the computer owes a reply.
    pub fn awaiting_computer_reply(&self) -> bool {
        self.awaiting_computer_reply
    }

    /// Moves played this game, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Counter identifying the current game; bumped by every reset.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col).unwrap()
    }

    #[test]
    fn test_configure_mode_change_resets() {
        let mut engine = GameEngine::with_seed(GameMode::Multiple, Mark::X, 1);
        engine.apply_move(c(0, 0), Mark::X);
        let epoch = engine.epoch();

        engine.configure(GameMode::Single, Mark::O);

        assert_eq!(engine.mode(), GameMode::Single);
        assert_eq!(engine.human_mark(), Mark::O);
        assert_eq!(engine.available().len(), 9);
        assert_eq!(engine.epoch(), epoch + 1);
    }

    #[test]
    fn test_configure_same_mode_keeps_board() {
        let mut engine = GameEngine::with_seed(GameMode::Single, Mark::X, 1);
        engine.apply_move(c(0, 0), Mark::X);
        engine.configure(GameMode::Single, Mark::O);
        assert_eq!(engine.board().get(c(0, 0)), Some(Mark::X));
        assert_eq!(engine.computer_mark(), Mark::X);
    }

    #[test]
    fn test_computer_move_clears_pending_flag() {
        let mut engine = GameEngine::with_seed(GameMode::Single, Mark::X, 9);
        engine.apply_move(c(1, 1), Mark::X);
        assert!(engine.awaiting_computer_reply());

        let coord = engine.apply_computer_move().unwrap();
        assert_ne!(coord, c(1, 1));
        assert_eq!(engine.board().get(coord), Some(Mark::O));
        assert!(!engine.awaiting_computer_reply());
        assert_eq!(engine.pending_reply(), None);
    }

    #[test]
    fn test_verify_passes_during_play() {
        let mut engine = GameEngine::with_seed(GameMode::Single, Mark::O, 5);
        engine.apply_move(c(2, 2), Mark::O);
        engine.apply_computer_move().unwrap();
        assert_eq!(engine.verify(), Ok(()));
    }

    #[test]
    fn test_verify_reports_corruption() {
        let mut engine = GameEngine::with_seed(GameMode::Multiple, Mark::X, 5);
        engine.apply_move(c(0, 0), Mark::X);
        // Sneak a mark onto the board without going through a move.
        engine.board.place(c(2, 2), Mark::O);

        match engine.verify() {
            Err(EngineError::InvariantViolation(text)) => {
                assert!(text.contains("partition"));
            }
            other => panic!("Expected invariant violation, got {:?}", other),
        }
    }
}

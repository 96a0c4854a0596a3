//! A terminal play session.
//!
//! The session is the engine's caller: it turns typed commands into engine
//! operations, keeps the [`ReplyScheduler`] in step with
//! [`GameEngine::pending_reply`], and prints the board after every change.

use crate::command::Command;
use crate::scheduler::ReplyScheduler;
use crate::settings::Settings;
use anyhow::Result;
use std::fmt::Write as _;
use tictac_engine::{DIMENSION, EngineError, GameEngine, GameMode, MoveReport, ReplyTicket};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, instrument, warn};

/// Whether the session should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep going.
    Continue,
    /// The player asked to leave.
    Quit,
}

/// One engine plus the timer for its computer replies.
pub struct Session {
    engine: GameEngine,
    scheduler: ReplyScheduler,
}

impl Session {
    /// Creates a session from resolved settings.
    #[instrument(skip(settings))]
    pub fn new(settings: &Settings) -> Self {
        let engine = match settings.seed() {
            Some(seed) => GameEngine::with_seed(*settings.mode(), *settings.player(), *seed),
            None => GameEngine::new(*settings.mode(), *settings.player()),
        };
        Self {
            engine,
            scheduler: ReplyScheduler::new(settings.reply_delay()),
        }
    }

    /// The engine being driven.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// The reply timer.
    pub fn scheduler(&self) -> &ReplyScheduler {
        &self.scheduler
    }

    /// Applies one command, appending anything to show to `out`.
    #[instrument(skip(self, out))]
    pub fn handle(&mut self, command: Command, out: &mut String) -> Flow {
        match command {
            Command::Move(coord) => {
                let mark = self.engine.human_mark();
                match self.engine.apply_move(coord, mark) {
                    MoveReport::Applied(outcome) => {
                        debug!(%coord, ?mark, ?outcome, "Move applied");
                        self.render(out);
                    }
                    MoveReport::Ignored(reason) => {
                        let _ = writeln!(out, "Move ignored: {}", reason);
                    }
                }
            }
            Command::Reset => {
                self.scheduler.cancel();
                self.engine.reset();
                let _ = writeln!(out, "New game.");
                self.render(out);
            }
            Command::Player(mark) => {
                self.engine.select_player(mark);
                let _ = writeln!(out, "Active player: {}", mark);
                self.render(out);
            }
            Command::Mode(mode) => {
                if mode != self.engine.mode() {
                    self.scheduler.cancel();
                }
                self.engine.configure(mode, self.engine.human_mark());
                let _ = writeln!(out, "Mode: {}", mode);
                self.render(out);
            }
            Command::Board => self.render(out),
            Command::Help => {
                let _ = writeln!(out, "{}", Command::HELP);
            }
            Command::Quit => return Flow::Quit,
        }

        self.sync_scheduler();
        Flow::Continue
    }

    /// Plays the computer's reply once its timer has fired.
    #[instrument(skip(self, out), fields(ticket = ticket.epoch()))]
    pub fn reply_due(&mut self, ticket: ReplyTicket, out: &mut String) {
        match self.engine.apply_scheduled_reply(ticket) {
            Ok(coord) => {
                let _ = writeln!(out, "Computer plays {}", coord);
                self.render(out);
            }
            Err(EngineError::StaleReply { .. }) => {
                debug!("Reply belonged to an earlier game");
            }
            Err(e) => {
                warn!(error = %e, "Computer reply refused");
            }
        }
        self.sync_scheduler();
    }

    /// Arms the timer when the engine owes a reply, disarms it otherwise.
    fn sync_scheduler(&mut self) {
        match self.engine.pending_reply() {
            Some(ticket) => self.scheduler.arm(ticket),
            None => {
                self.scheduler.cancel();
            }
        }
    }

    /// Draws the board, highlighting a winning line with brackets, followed
    /// by the outcome message or a prompt.
    pub fn render(&self, out: &mut String) {
        let board = self.engine.board();
        let line = self.engine.winning_line();

        let header: String = (0..DIMENSION).map(|col| format!(" {}  ", col)).collect();
        let _ = writeln!(out, "   {}", header.trim_end());
        for cell in board.cells() {
            let coord = cell.coord();
            if coord.col() == 0 {
                let _ = write!(out, "{}  ", coord.row());
            }
            let symbol = cell.mark().map_or(" ".to_string(), |m| m.to_string());
            if line.is_some_and(|l| l.contains(coord)) {
                let _ = write!(out, "[{}] ", symbol);
            } else {
                let _ = write!(out, " {}  ", symbol);
            }
            if coord.col() == DIMENSION - 1 {
                let _ = writeln!(out);
            }
        }

        let outcome = self.engine.outcome();
        match outcome.message() {
            Some(message) => {
                let _ = writeln!(out, "{}", message);
            }
            None if self.engine.awaiting_computer_reply() => {
                let _ = writeln!(out, "Computer is thinking...");
            }
            None => {
                let _ = writeln!(out, "{}", self.prompt());
            }
        }
        if let Some(line) = line {
            let _ = writeln!(out, "Winning line: {}", line);
        }
    }

    fn prompt(&self) -> String {
        match self.engine.mode() {
            GameMode::Single => format!("Your move ({}).", self.engine.human_mark()),
            GameMode::Multiple => format!("{} to move.", self.engine.human_mark()),
        }
    }

    /// Runs the session until `quit` or end of input.
    ///
    /// After input ends, a reply that is already scheduled is still played
    /// before returning.
    #[instrument(skip_all)]
    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!(mode = %self.engine.mode(), player = %self.engine.human_mark(), "Session started");

        let mut out = String::new();
        let _ = writeln!(out, "Tic-tac-toe ({} mode). Type `help` for commands.", self.engine.mode());
        self.render(&mut out);
        flush(&mut output, &mut out).await?;

        let mut lines = input.lines();
        let mut input_closed = false;

        loop {
            if input_closed && !self.scheduler.is_armed() {
                break;
            }

            tokio::select! {
                line = lines.next_line(), if !input_closed => {
                    let Some(line) = line? else {
                        debug!("Input closed");
                        input_closed = true;
                        continue;
                    };
                    if line.trim().is_empty() {
                        continue;
                    }
                    let flow = match line.parse::<Command>() {
                        Ok(command) => self.handle(command, &mut out),
                        Err(e) => {
                            let _ = writeln!(out, "{}", e);
                            Flow::Continue
                        }
                    };
                    flush(&mut output, &mut out).await?;
                    if flow == Flow::Quit {
                        break;
                    }
                }
                ticket = self.scheduler.fired() => {
                    self.reply_due(ticket, &mut out);
                    flush(&mut output, &mut out).await?;
                }
            }
        }

        info!(moves = self.engine.history().len(), "Session ended");
        Ok(())
    }
}

async fn flush<W: AsyncWrite + Unpin>(output: &mut W, buffer: &mut String) -> Result<()> {
    output.write_all(buffer.as_bytes()).await?;
    output.flush().await?;
    buffer.clear();
    Ok(())
}

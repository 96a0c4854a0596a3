//! Line commands typed at the terminal.

use std::str::FromStr;
use tictac_engine::{Coordinate, EngineError, GameMode, Mark};

/// A parsed terminal command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the active player's mark: `<row> <col>` or `<row>,<col>`.
    Move(Coordinate),
    /// Start a new game: `reset`.
    Reset,
    /// Switch the active player: `player x|o`.
    Player(Mark),
    /// Switch mode (starts a new game): `mode single|multiple`.
    Mode(GameMode),
    /// Print the board again: `board`.
    Board,
    /// Print the command list: `help`.
    Help,
    /// Leave: `quit`.
    Quit,
}

/// Why a line could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CommandError {
    /// Blank line.
    #[display("Empty command")]
    Empty,
    /// Not a known command word.
    #[display("Unknown command: {_0}")]
    Unknown(#[error(not(source))] String),
    /// Argument missing or malformed.
    #[display("Bad argument for {_0}")]
    BadArgument(#[error(not(source))] &'static str),
    /// Row/column parsed but off the board.
    #[display("{_0}")]
    #[from]
    OffBoard(#[error(source)] EngineError),
}

impl Command {
    /// Text listing the commands.
    pub const HELP: &'static str = "\
Commands:
  <row> <col>            place your mark (rows and columns are 0-2)
  player x|o             switch the active player
  mode single|multiple   switch mode and start a new game
  reset                  start a new game
  board                  show the board
  help                   show this list
  quit                   leave";
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let normalized = line.trim().replace(',', " ");
        let mut words = normalized.split_whitespace();
        let Some(first) = words.next() else {
            return Err(CommandError::Empty);
        };
        let rest: Vec<&str> = words.collect();

        if let Ok(row) = first.parse::<usize>() {
            let [col] = rest.as_slice() else {
                return Err(CommandError::BadArgument("move"));
            };
            let col = col
                .parse::<usize>()
                .map_err(|_| CommandError::BadArgument("move"))?;
            return Ok(Command::Move(Coordinate::new(row, col)?));
        }

        match (first.to_ascii_lowercase().as_str(), rest.as_slice()) {
            ("reset", []) => Ok(Command::Reset),
            ("board", []) => Ok(Command::Board),
            ("help" | "?", []) => Ok(Command::Help),
            ("quit" | "exit" | "q", []) => Ok(Command::Quit),
            ("player", [mark]) => mark
                .parse::<Mark>()
                .map(Command::Player)
                .map_err(|_| CommandError::BadArgument("player")),
            ("mode", [mode]) => mode
                .parse::<GameMode>()
                .map(Command::Mode)
                .map_err(|_| CommandError::BadArgument("mode")),
            ("player", _) => Err(CommandError::BadArgument("player")),
            ("mode", _) => Err(CommandError::BadArgument("mode")),
            _ => Err(CommandError::Unknown(line.trim().to_string())),
        }
    }
}

//! Terminal front end for the tic-tac-toe engine.
//!
//! # Architecture
//!
//! - **Settings**: defaults, TOML file, environment and CLI flags
//! - **Scheduler**: the single cancelable timer behind the computer's reply
//! - **Session**: reads line commands, drives the engine, renders the board

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod command;
mod scheduler;
mod session;
mod settings;

pub use cli::Cli;
pub use command::{Command, CommandError};
pub use scheduler::ReplyScheduler;
pub use session::{Flow, Session};
pub use settings::{ConfigError, Settings};

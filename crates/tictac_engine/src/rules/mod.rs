//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`crate::Board`]; the engine composes them after
//! each placement.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::find_winning_line;

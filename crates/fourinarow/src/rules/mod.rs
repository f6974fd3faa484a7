//! Game rules for four-in-a-row.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! the engine so contracts and tests can use them directly.

pub mod draw;
pub mod outcome;
pub mod win;

pub use draw::is_full;
pub use outcome::{Outcome, evaluate_outcome};
pub use win::{Direction, WinningLine, find_winning_line};

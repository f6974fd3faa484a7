//! Four-in-a-row match-state engine.
//!
//! Pure functions over immutable match snapshots: validate a move, apply
//! it, detect a win or draw, and compute the next status. No I/O, no
//! shared state; storage, sync and presentation belong to the caller.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Cell`], [`Seat`], [`Dimensions`]
//! - **Status**: [`MatchStatus`], a closed set of lifecycle states
//! - **Snapshot**: [`MatchSnapshot`], board + status + both participants
//! - **Rules**: [`evaluate_outcome`], [`find_winning_line`], [`is_full`]
//! - **Engine**: [`apply_move`], [`replay`]
//! - **Contracts / invariants**: pre- and postconditions for moves
//! - **Document**: the stored record format ([`MatchDocument`])
//!
//! # Example
//!
//! ```
//! use fourinarow::{Dimensions, MatchSnapshot, MatchStatus, apply_move};
//!
//! let snapshot = MatchSnapshot::started(Dimensions::STANDARD, "alice".into(), "bob".into());
//! let next = apply_move(&snapshot, 0, &"alice".into())?;
//! assert_eq!(next.status(), MatchStatus::PlayerTwoTurn);
//! # Ok::<(), fourinarow::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod document;
mod engine;
mod snapshot;
mod status;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError};
pub use config::{BoardConfig, ConfigError};
pub use document::{DocumentError, MatchDocument};
pub use engine::{apply_move, replay};
pub use rules::{Direction, Outcome, WinningLine, evaluate_outcome, find_winning_line, is_full};
pub use snapshot::{MatchSnapshot, PlayerId};
pub use status::MatchStatus;
pub use types::{Board, BoardError, Cell, Dimensions, RUN_LENGTH, Seat};

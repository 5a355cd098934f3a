//! Strictly Rounds - tic-tac-toe round engine
//!
//! Pure game logic for two-player tic-tac-toe with a session scoreboard.
//! A presentation layer owns a [`RoundEngine`], forwards moves and resets to
//! it, and renders from [`Snapshot`]s.
//!
//! # Example
//!
//! ```
//! use strictly_rounds::{Player, RoundEngine, RoundStatus};
//!
//! let mut engine = RoundEngine::new();
//! for index in [0, 3, 1, 4] {
//!     engine.apply_move(index).expect("legal move");
//! }
//! assert_eq!(engine.apply_move(2), Ok(RoundStatus::Won(Player::X)));
//! assert_eq!(engine.scoreboard().wins_x(), 1);
//!
//! engine.start_new_round();
//! assert_eq!(engine.status(), RoundStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
pub mod invariants;
mod position;
pub mod rules;
mod snapshot;
mod types;

pub use engine::RoundEngine;
pub use error::MoveRejection;
pub use position::Position;
pub use rules::WinningLine;
pub use snapshot::Snapshot;
pub use types::{Board, Cell, Player, RoundStatus, Scoreboard};

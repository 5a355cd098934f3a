//! Round rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. The engine calls [`evaluate`] after every
//! accepted move; nothing here touches engine state.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WINNING_LINES, WinningLine, check_winner, winning_line};

use crate::{Board, RoundStatus};
use tracing::instrument;

/// Derives the round status from a board.
///
/// Wins are checked before fullness, so a ninth move that completes a line
/// is a win rather than a draw.
#[instrument(skip(board), ret)]
pub fn evaluate(board: &Board) -> RoundStatus {
    if let Some(winner) = check_winner(board) {
        RoundStatus::Won(winner)
    } else if is_full(board) {
        RoundStatus::Drawn
    } else {
        RoundStatus::InProgress
    }
}

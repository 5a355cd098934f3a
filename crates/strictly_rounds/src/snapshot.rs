//! Read-only view of the engine for renderers.

use crate::{Board, Player, RoundStatus, Scoreboard, WinningLine};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Everything a presentation layer needs to draw the table.
///
/// Owned copy; holding one never borrows the engine.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// 1-based round number within the session.
    round: u32,
    /// Board contents.
    board: Board,
    /// Player to move, or the last mover once the round is over.
    current_player: Player,
    /// Status of the round.
    status: RoundStatus,
    /// Session scores.
    scoreboard: Scoreboard,
    /// Line that decided a won round.
    winning_line: Option<WinningLine>,
}

impl Snapshot {
    pub(crate) fn new(
        round: u32,
        board: Board,
        current_player: Player,
        status: RoundStatus,
        scoreboard: Scoreboard,
        winning_line: Option<WinningLine>,
    ) -> Self {
        Self {
            round,
            board,
            current_player,
            status,
            scoreboard,
            winning_line,
        }
    }
}

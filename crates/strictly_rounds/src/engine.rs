//! Round engine: board, turn order and session scoring.
//!
//! The engine owns all game state. Callers submit moves and resets and read
//! [`Snapshot`]s back; they never mutate state directly.
//!
//! ```text
//! InProgress --apply_move(valid)--> InProgress | Won(p) | Drawn
//! Won(p) | Drawn --start_new_round()--> InProgress
//! ```

use crate::invariants::debug_assert_invariants;
use crate::{
    Board, Cell, MoveRejection, Player, Position, RoundStatus, Scoreboard, Snapshot, WinningLine,
    rules,
};
use tracing::{debug, info, instrument};

/// Tic-tac-toe round engine with a session scoreboard.
#[derive(Debug, Clone)]
pub struct RoundEngine {
    round: u32,
    board: Board,
    current_player: Player,
    status: RoundStatus,
    winning_line: Option<WinningLine>,
    scoreboard: Scoreboard,
}

impl RoundEngine {
    /// Starts a session at round 1 with a zeroed scoreboard.
    #[instrument]
    pub fn new() -> Self {
        Self {
            round: 1,
            board: Board::new(),
            current_player: Player::X,
            status: RoundStatus::InProgress,
            winning_line: None,
            scoreboard: Scoreboard::new(),
        }
    }

    /// Marks `cell_index` for the current player.
    ///
    /// Returns the resulting status. A terminal status has already been
    /// credited to the scoreboard by the time this returns.
    ///
    /// # Errors
    ///
    /// - [`MoveRejection::RoundNotInProgress`] once the round has ended
    /// - [`MoveRejection::InvalidIndex`] for indices outside 0-8
    /// - [`MoveRejection::CellOccupied`] when the cell already holds a mark
    ///
    /// A rejected move changes nothing.
    #[instrument(skip(self), fields(round = self.round, player = %self.current_player))]
    pub fn apply_move(&mut self, cell_index: usize) -> Result<RoundStatus, MoveRejection> {
        if self.status.is_terminal() {
            debug!("Move after round end rejected");
            return Err(MoveRejection::RoundNotInProgress);
        }

        let Some(pos) = Position::from_index(cell_index) else {
            debug!(cell_index, "Out-of-range move rejected");
            return Err(MoveRejection::InvalidIndex(cell_index));
        };

        if !self.board.is_empty(pos) {
            debug!(position = %pos, "Move onto occupied cell rejected");
            return Err(MoveRejection::CellOccupied(pos));
        }

        self.board.set(pos, Cell::Occupied(self.current_player));
        debug!(position = %pos, "Mark placed");

        let status = rules::evaluate(&self.board);
        if status.is_terminal() {
            self.status = status;
            self.winning_line = rules::winning_line(&self.board).map(|(_, line)| line);
            self.on_round_end(status);
        } else {
            self.current_player = self.current_player.opponent();
        }

        debug_assert_invariants(&self.snapshot());
        Ok(status)
    }

    /// Position-typed form of [`apply_move`](Self::apply_move).
    pub fn place(&mut self, pos: Position) -> Result<RoundStatus, MoveRejection> {
        self.apply_move(pos.to_index())
    }

    /// Credits a terminal status to the scoreboard.
    ///
    /// Only [`apply_move`](Self::apply_move) calls this, once, on the move
    /// that ends the round. The updated scores reach callers through
    /// [`snapshot`](Self::snapshot).
    #[instrument(skip(self))]
    fn on_round_end(&mut self, status: RoundStatus) {
        self.scoreboard.record(status);
        info!(
            round = self.round,
            %status,
            wins_x = self.scoreboard.wins_x(),
            wins_o = self.scoreboard.wins_o(),
            ties = self.scoreboard.ties(),
            "Round ended"
        );
    }

    /// Clears the board for the next round. Scores are kept.
    ///
    /// Allowed at any time, including mid-round; an abandoned round scores
    /// nothing.
    #[instrument(skip(self), fields(from_round = self.round))]
    pub fn start_new_round(&mut self) {
        if !self.status.is_terminal() && self.board != Board::new() {
            debug!("Abandoning unfinished round");
        }
        self.round += 1;
        self.board = Board::new();
        self.current_player = Player::X;
        self.status = RoundStatus::InProgress;
        self.winning_line = None;
        info!(round = self.round, "New round started");

        debug_assert_invariants(&self.snapshot());
    }

    /// Read-only copy of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            self.round,
            self.board.clone(),
            self.current_player,
            self.status,
            self.scoreboard,
            self.winning_line,
        )
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move, or the last mover once the round is over.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Status of the current round.
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Session scores.
    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    /// 1-based round number.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Line that decided the round, when won.
    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }
}

impl Default for RoundEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_engine_state() {
        let engine = RoundEngine::new();
        assert_eq!(engine.round(), 1);
        assert_eq!(engine.current_player(), Player::X);
        assert_eq!(engine.status(), RoundStatus::InProgress);
        assert_eq!(engine.scoreboard(), Scoreboard::new());
        assert_eq!(engine.board(), &Board::new());
    }

    #[test]
    fn test_on_round_end_credits_once_per_win() {
        let mut engine = RoundEngine::new();
        for index in [0, 3, 1, 4] {
            engine.apply_move(index).expect("legal move");
        }
        assert_eq!(engine.scoreboard().completed(), 0);
        assert_eq!(engine.apply_move(2), Ok(RoundStatus::Won(Player::X)));
        assert_eq!(engine.scoreboard().wins_x(), 1);

        // Later moves are rejected and never re-credit the round.
        assert_eq!(engine.apply_move(5), Err(MoveRejection::RoundNotInProgress));
        assert_eq!(engine.scoreboard().completed(), 1);
    }

    #[test]
    fn test_rejection_order_terminal_first() {
        let mut engine = RoundEngine::new();
        for index in [0, 3, 1, 4, 2] {
            engine.apply_move(index).expect("legal move");
        }
        // Out of range and occupied both lose to the terminal check.
        assert_eq!(engine.apply_move(42), Err(MoveRejection::RoundNotInProgress));
        assert_eq!(engine.apply_move(0), Err(MoveRejection::RoundNotInProgress));
    }

    #[test]
    fn test_out_of_range_move_changes_nothing() {
        let mut engine = RoundEngine::new();
        let before = engine.snapshot();
        assert_eq!(engine.apply_move(9), Err(MoveRejection::InvalidIndex(9)));
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_round_end_scores_visible_in_snapshot() {
        let mut engine = RoundEngine::new();
        for index in [0, 1, 2, 4, 3, 5, 7, 6] {
            engine.apply_move(index).expect("legal move");
        }
        assert_eq!(engine.apply_move(8), Ok(RoundStatus::Drawn));
        assert_eq!(engine.snapshot().scoreboard().ties(), 1);
    }

    #[test]
    fn test_place_matches_apply_move() {
        let mut engine = RoundEngine::new();
        assert_eq!(engine.place(Position::Center), Ok(RoundStatus::InProgress));
        assert_eq!(engine.board().get(Position::Center), Cell::Occupied(Player::X));
        assert_eq!(
            engine.apply_move(4),
            Err(MoveRejection::CellOccupied(Position::Center))
        );
    }

    #[test]
    fn test_winning_line_recorded_and_cleared() {
        let mut engine = RoundEngine::new();
        for index in [0, 3, 1, 4, 2] {
            engine.apply_move(index).expect("legal move");
        }
        assert_eq!(engine.winning_line(), Some(rules::WINNING_LINES[0]));
        engine.start_new_round();
        assert_eq!(engine.winning_line(), None);
    }
}

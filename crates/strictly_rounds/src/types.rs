//! Core domain types for a tic-tac-toe round.

use crate::Position;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (opens every round).
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 board, cells in row-major order (0-8).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Number of cells on the board.
    pub const CELLS: usize = 9;

    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; Self::CELLS],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Gets the cell at a raw index, `None` when out of range.
    pub fn get_index(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Sets the cell at the given position.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Counts the marks a player has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(player))
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Status of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    /// Round is ongoing.
    InProgress,
    /// Round ended with a winner.
    Won(Player),
    /// Board filled with no winner.
    Drawn,
}

impl RoundStatus {
    /// True for `Won` and `Drawn`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, RoundStatus::InProgress)
    }
}

impl std::fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundStatus::InProgress => write!(f, "In progress"),
            RoundStatus::Won(player) => write!(f, "Player {} wins", player),
            RoundStatus::Drawn => write!(f, "Draw"),
        }
    }
}

/// Session score counters.
///
/// Persists across rounds; only a new engine starts from zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scoreboard {
    wins_x: u32,
    wins_o: u32,
    ties: u32,
}

impl Scoreboard {
    /// Creates a zeroed scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds won by X.
    pub fn wins_x(&self) -> u32 {
        self.wins_x
    }

    /// Rounds won by O.
    pub fn wins_o(&self) -> u32 {
        self.wins_o
    }

    /// Rounds ending in a draw.
    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// Rounds won by the given player.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.wins_x,
            Player::O => self.wins_o,
        }
    }

    /// Total completed rounds.
    pub fn completed(&self) -> u32 {
        self.wins_x + self.wins_o + self.ties
    }

    /// Credits a terminal status. `InProgress` is a no-op.
    #[instrument(level = "debug")]
    pub(crate) fn record(&mut self, status: RoundStatus) {
        match status {
            RoundStatus::Won(Player::X) => self.wins_x += 1,
            RoundStatus::Won(Player::O) => self.wins_o += 1,
            RoundStatus::Drawn => self.ties += 1,
            RoundStatus::InProgress => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_get_index_out_of_range() {
        let board = Board::new();
        assert_eq!(board.get_index(8), Some(Cell::Empty));
        assert_eq!(board.get_index(9), None);
    }

    #[test]
    fn test_scoreboard_record() {
        let mut score = Scoreboard::new();
        score.record(RoundStatus::Won(Player::X));
        score.record(RoundStatus::Won(Player::O));
        score.record(RoundStatus::Drawn);
        score.record(RoundStatus::InProgress);
        assert_eq!(
            (score.wins_x(), score.wins_o(), score.ties()),
            (1, 1, 1)
        );
        assert_eq!(score.completed(), 3);
        assert_eq!(score.wins(Player::X), 1);
        assert_eq!(score.wins(Player::O), score.wins_o());
    }
}

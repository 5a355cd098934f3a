//! Alternating turn invariant: X, O, X, O, ... starting from X.

use super::Invariant;
use crate::{Player, Snapshot};

/// Invariant: players alternate turns, X first.
///
/// X holds as many marks as O, or exactly one more. While the round is in
/// progress the player to move follows from those counts; once it ends the
/// current player is frozen on the last mover.
pub struct AlternatingTurnInvariant;

impl Invariant<Snapshot> for AlternatingTurnInvariant {
    fn holds(snapshot: &Snapshot) -> bool {
        let board = snapshot.board();
        let xs = board.count(Player::X);
        let os = board.count(Player::O);

        let x_moved_last = match xs.checked_sub(os) {
            Some(0) => false,
            Some(1) => true,
            _ => return false,
        };

        let expected = match (snapshot.status().is_terminal(), x_moved_last) {
            (false, false) | (true, true) => Player::X,
            (false, true) | (true, false) => Player::O,
        };
        *snapshot.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RoundEngine;

    #[test]
    fn test_empty_round_holds() {
        assert!(AlternatingTurnInvariant::holds(&RoundEngine::new().snapshot()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut engine = RoundEngine::new();
        for index in [0, 4, 8, 2, 6] {
            engine.apply_move(index).expect("legal move");
            assert!(AlternatingTurnInvariant::holds(&engine.snapshot()));
        }
    }

    #[test]
    fn test_frozen_player_after_win_holds() {
        let mut engine = RoundEngine::new();
        for index in [0, 3, 1, 4, 2] {
            engine.apply_move(index).expect("legal move");
        }
        assert_eq!(engine.current_player(), Player::X);
        assert!(AlternatingTurnInvariant::holds(&engine.snapshot()));
    }
}

//! Status consistency invariant: the stored status matches the board.

use super::Invariant;
use crate::{Snapshot, rules};

/// Invariant: the round status and winning line are exactly what the rules
/// derive from the board.
pub struct StatusConsistentInvariant;

impl Invariant<Snapshot> for StatusConsistentInvariant {
    fn holds(snapshot: &Snapshot) -> bool {
        let board = snapshot.board();
        *snapshot.status() == rules::evaluate(board)
            && *snapshot.winning_line() == rules::winning_line(board).map(|(_, line)| line)
    }

    fn description() -> &'static str {
        "Round status matches the board"
    }
}

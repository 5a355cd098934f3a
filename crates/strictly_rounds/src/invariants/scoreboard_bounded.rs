//! Scoreboard invariant: no round is scored twice.

use super::Invariant;
use crate::Snapshot;

/// Invariant: completed rounds never exceed the rounds that could have ended.
///
/// Every round before the current one ended at most once (rounds reset
/// mid-play score nothing), and the current round counts only once terminal.
pub struct ScoreboardBoundedInvariant;

impl Invariant<Snapshot> for ScoreboardBoundedInvariant {
    fn holds(snapshot: &Snapshot) -> bool {
        let finished_before = snapshot.round().saturating_sub(1);
        let current = u32::from(snapshot.status().is_terminal());
        snapshot.scoreboard().completed() <= finished_before + current
    }

    fn description() -> &'static str {
        "Each round is scored at most once"
    }
}

//! First-class invariants for a round.
//!
//! Invariants are logical properties that must hold throughout a session.
//! They are checked against a [`Snapshot`] so they can be tested without
//! reaching into engine internals.

use crate::Snapshot;
use derive_more::Display;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        collect::<S, I3>(state, &mut violations);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod alternating_turn;
pub mod scoreboard_bounded;
pub mod status_consistent;

pub use alternating_turn::AlternatingTurnInvariant;
pub use scoreboard_bounded::ScoreboardBoundedInvariant;
pub use status_consistent::StatusConsistentInvariant;

/// All round invariants as a composable set.
pub type RoundInvariants = (
    AlternatingTurnInvariant,
    StatusConsistentInvariant,
    ScoreboardBoundedInvariant,
);

/// Panics in debug builds if any round invariant is broken.
pub(crate) fn debug_assert_invariants(snapshot: &Snapshot) {
    if cfg!(debug_assertions)
        && let Err(violations) = RoundInvariants::check_all(snapshot)
    {
        tracing::error!(?violations, "Round invariants violated");
        panic!("Round invariants violated: {:?}", violations);
    }
}

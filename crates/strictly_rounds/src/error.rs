//! Move rejection reasons.

use crate::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Why a move was refused.
///
/// Rejections come from stale or duplicate input and leave the engine
/// untouched, so callers may ignore them.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveRejection {
    /// Cell index outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    InvalidIndex(#[error(not(source))] usize),

    /// The target cell already holds a mark.
    #[display("{} is already occupied", _0)]
    CellOccupied(#[error(not(source))] Position),

    /// The round already ended and has not been reset.
    #[display("Round is over; start a new round to keep playing")]
    RoundNotInProgress,
}

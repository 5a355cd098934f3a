//! Round summary text shown in the end-of-round modal.

use strictly_rounds::{Player, RoundStatus, Scoreboard};

/// Modal contents for a finished round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    /// Round that ended.
    pub round: u32,
    /// Winner, `None` for a tie.
    pub winner: Option<Player>,
    /// Headline, e.g. "X TAKES THE ROUND".
    pub title: String,
    /// Secondary line; empty for a tie.
    pub subtitle: String,
    /// Scores including this round.
    pub scoreboard: Scoreboard,
}

impl RoundSummary {
    /// Builds the summary for a terminal status; `None` while in progress.
    pub fn for_status(round: u32, status: RoundStatus, scoreboard: Scoreboard) -> Option<Self> {
        let (winner, title, subtitle) = match status {
            RoundStatus::InProgress => return None,
            RoundStatus::Won(player) => (
                Some(player),
                format!("{} TAKES THE ROUND", player),
                format!("PLAYER {} WINS!", player),
            ),
            RoundStatus::Drawn => (None, "ROUND TIED".to_string(), String::new()),
        };
        Some(Self {
            round,
            winner,
            title,
            subtitle,
            scoreboard,
        })
    }
}

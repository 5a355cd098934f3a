//! Application state and logic.
//!
//! `App` owns the [`RoundEngine`] and turns decoded input and timer events
//! into engine calls. It performs no I/O, so the whole front end can be
//! driven from tests.

use crate::input::{Command, move_cursor};
use crate::summary::RoundSummary;
use strictly_rounds::{Position, RoundEngine, RoundStatus, Snapshot};
use tracing::{debug, info};

/// Events delivered to the app by the runtime loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// Decoded key press.
    Input(Command),
    /// The reveal delay scheduled for `round` has elapsed.
    RevealSummary {
        /// Round the timer was started for.
        round: u32,
    },
}

/// Request for the runtime to start a reveal timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleReveal {
    /// Round whose summary should appear when the timer fires.
    pub round: u32,
}

/// Summary modal lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Nothing shown.
    Hidden,
    /// Round ended; waiting for the reveal timer.
    Pending {
        /// Round that ended.
        round: u32,
    },
    /// Summary on screen.
    Open(RoundSummary),
    /// Summary dismissed; the finished board stays visible.
    Dismissed,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: RoundEngine,
    cursor: Position,
    modal: Modal,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh session.
    pub fn new() -> Self {
        Self {
            engine: RoundEngine::new(),
            cursor: Position::Center,
            modal: Modal::Hidden,
            status_message: "X opens the round.".to_string(),
            should_quit: false,
        }
    }

    /// Engine state for rendering.
    pub fn snapshot(&self) -> Snapshot {
        self.engine.snapshot()
    }

    /// Cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Modal state.
    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    /// Current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one event. Returns a timer request when a round just ended.
    pub fn handle_event(&mut self, event: UiEvent) -> Option<ScheduleReveal> {
        debug!(?event, "Handling UI event");
        match event {
            UiEvent::Input(command) => self.handle_command(command),
            UiEvent::RevealSummary { round } => {
                self.reveal(round);
                None
            }
        }
    }

    fn handle_command(&mut self, command: Command) -> Option<ScheduleReveal> {
        match command {
            Command::Place(index) => self.place(index),
            Command::PlaceAtCursor => self.place(self.cursor.to_index()),
            Command::Cursor(key) => {
                self.cursor = move_cursor(self.cursor, key);
                None
            }
            Command::Restart => {
                self.restart("Board cleared.");
                None
            }
            Command::NextRound => {
                if matches!(self.modal, Modal::Open(_)) {
                    self.restart("Next round.");
                }
                None
            }
            Command::Quit => {
                if matches!(self.modal, Modal::Open(_)) {
                    debug!("Summary dismissed");
                    self.modal = Modal::Dismissed;
                    self.status_message = "Round over. Press 'r' to play again.".to_string();
                } else {
                    info!("User quit");
                    self.should_quit = true;
                }
                None
            }
        }
    }

    fn place(&mut self, index: usize) -> Option<ScheduleReveal> {
        if matches!(self.modal, Modal::Open(_)) {
            return None;
        }
        let mover = self.engine.current_player();
        match self.engine.apply_move(index) {
            Ok(RoundStatus::InProgress) => {
                self.status_message = format!("{} played {}.", mover, self.position_label(index));
                None
            }
            Ok(status) => {
                let round = self.engine.round();
                info!(round, %status, "Round finished, scheduling summary");
                self.status_message = status.to_string();
                self.modal = Modal::Pending { round };
                Some(ScheduleReveal { round })
            }
            Err(rejection) => {
                debug!(%rejection, "Move ignored");
                self.status_message = rejection.to_string();
                None
            }
        }
    }

    fn reveal(&mut self, round: u32) {
        let snapshot = self.engine.snapshot();
        if self.modal != (Modal::Pending { round }) || *snapshot.round() != round {
            debug!(round, "Stale reveal ignored");
            return;
        }
        if let Some(summary) =
            RoundSummary::for_status(round, *snapshot.status(), *snapshot.scoreboard())
        {
            self.modal = Modal::Open(summary);
        }
    }

    fn restart(&mut self, message: &str) {
        self.engine.start_new_round();
        self.modal = Modal::Hidden;
        self.status_message = message.to_string();
    }

    fn position_label(&self, index: usize) -> &'static str {
        Position::from_index(index).map_or("?", |pos| pos.label())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_rounds::Player;

    fn play(app: &mut App, moves: &[usize]) -> Option<ScheduleReveal> {
        let mut scheduled = None;
        for &index in moves {
            scheduled = app.handle_event(UiEvent::Input(Command::Place(index)));
        }
        scheduled
    }

    #[test]
    fn test_win_schedules_then_reveals_summary() {
        let mut app = App::new();
        let scheduled = play(&mut app, &[0, 3, 1, 4, 2]);

        assert_eq!(scheduled, Some(ScheduleReveal { round: 1 }));
        assert_eq!(app.modal(), &Modal::Pending { round: 1 });

        app.handle_event(UiEvent::RevealSummary { round: 1 });
        match app.modal() {
            Modal::Open(summary) => {
                assert_eq!(summary.winner, Some(Player::X));
                assert_eq!(summary.scoreboard.wins_x(), 1);
            }
            other => panic!("Expected open modal, got {:?}", other),
        }
    }

    #[test]
    fn test_stale_reveal_after_restart_ignored() {
        let mut app = App::new();
        play(&mut app, &[0, 3, 1, 4, 2]);
        app.handle_event(UiEvent::Input(Command::Restart));

        app.handle_event(UiEvent::RevealSummary { round: 1 });

        assert_eq!(app.modal(), &Modal::Hidden);
        assert_eq!(*app.snapshot().round(), 2);
    }

    #[test]
    fn test_next_round_only_from_open_modal() {
        let mut app = App::new();
        play(&mut app, &[4]);
        app.handle_event(UiEvent::Input(Command::NextRound));
        assert_eq!(*app.snapshot().round(), 1);

        play(&mut app, &[0, 1, 3, 2, 6]);
        app.handle_event(UiEvent::RevealSummary { round: 1 });
        app.handle_event(UiEvent::Input(Command::NextRound));

        assert_eq!(*app.snapshot().round(), 2);
        assert_eq!(app.modal(), &Modal::Hidden);
        assert_eq!(app.snapshot().scoreboard().wins_o(), 1);
    }

    #[test]
    fn test_quit_closes_modal_before_app() {
        let mut app = App::new();
        play(&mut app, &[0, 3, 1, 4, 2]);
        app.handle_event(UiEvent::RevealSummary { round: 1 });

        app.handle_event(UiEvent::Input(Command::Quit));
        assert_eq!(app.modal(), &Modal::Dismissed);
        assert!(!app.should_quit());

        // Finished board stays; moves are still refused.
        assert_eq!(app.handle_event(UiEvent::Input(Command::Place(8))), None);
        assert_eq!(app.snapshot().scoreboard().completed(), 1);

        app.handle_event(UiEvent::Input(Command::Quit));
        assert!(app.should_quit());
    }

    #[test]
    fn test_cursor_placement() {
        let mut app = App::new();
        app.handle_event(UiEvent::Input(Command::Cursor(crossterm::event::KeyCode::Up)));
        app.handle_event(UiEvent::Input(Command::PlaceAtCursor));

        assert_eq!(app.cursor(), Position::TopCenter);
        assert_eq!(
            app.snapshot().board().get(Position::TopCenter),
            strictly_rounds::Cell::Occupied(Player::X)
        );
        assert_eq!(app.status_message(), "X played Top-center.");
    }
}

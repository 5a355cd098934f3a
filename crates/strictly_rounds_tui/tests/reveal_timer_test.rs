//! Delayed summary reveal driven through the tokio timer.

use std::time::Duration;
use strictly_rounds::Player;
use strictly_rounds_tui::runtime::schedule_reveal;
use strictly_rounds_tui::{App, Command, Modal, ScheduleReveal, UiEvent};
use tokio::sync::mpsc;

const DELAY: Duration = Duration::from_millis(20);

fn finish_round_for_x(app: &mut App) -> ScheduleReveal {
    let mut scheduled = None;
    for index in [0, 3, 1, 4, 2] {
        scheduled = app.handle_event(UiEvent::Input(Command::Place(index)));
    }
    scheduled.expect("winning move schedules a reveal")
}

#[tokio::test]
async fn test_summary_revealed_after_delay() {
    let mut app = App::new();
    let request = finish_round_for_x(&mut app);
    let (tx, mut rx) = mpsc::unbounded_channel();

    schedule_reveal(request, DELAY, tx);
    assert!(rx.try_recv().is_err());
    assert_eq!(app.modal(), &Modal::Pending { round: 1 });

    let event = rx.recv().await.expect("reveal event");
    assert_eq!(event, UiEvent::RevealSummary { round: 1 });

    app.handle_event(event);
    match app.modal() {
        Modal::Open(summary) => {
            assert_eq!(summary.round, 1);
            assert_eq!(summary.winner, Some(Player::X));
        }
        other => panic!("Expected open modal, got {:?}", other),
    }
}

#[tokio::test]
async fn test_restart_before_timer_keeps_modal_hidden() {
    let mut app = App::new();
    let request = finish_round_for_x(&mut app);
    let (tx, mut rx) = mpsc::unbounded_channel();

    schedule_reveal(request, DELAY, tx);
    app.handle_event(UiEvent::Input(Command::Restart));

    let event = rx.recv().await.expect("reveal event");
    app.handle_event(event);

    assert_eq!(app.modal(), &Modal::Hidden);
    assert_eq!(*app.snapshot().round(), 2);
    assert_eq!(app.snapshot().scoreboard().wins(Player::X), 1);
}

//! Terminal setup and the event loop.

use crate::app::{App, ScheduleReveal, UiEvent};
use crate::config::TuiConfig;
use crate::input::command_for;
use crate::ui;
use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

/// Initializes file logging. `RUST_LOG` overrides the default `info` filter.
pub fn init_tracing(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Runs the game until the user quits, restoring the terminal afterwards.
#[instrument(skip_all, fields(reveal_delay_ms = config.reveal_delay_ms()))]
pub async fn run(config: TuiConfig) -> Result<()> {
    info!("Starting Strictly Rounds TUI");

    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let res = event_loop(&mut terminal, &config).await;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Raw mode and the alternate screen for as long as it lives.
///
/// Restores the terminal on drop, including while unwinding a panic.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen).context("Failed to enter alternate screen")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = disable_raw_mode() {
            error!(error = %e, "Failed to disable raw mode");
        }
        if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show) {
            error!(error = %e, "Failed to restore terminal");
        }
        debug!("Terminal restored");
    }
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &TuiConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    spawn_input_forwarder(event_tx.clone());

    let mut app = App::new();
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        let Some(event) = event_rx.recv().await else {
            info!("Event channel closed");
            return Ok(());
        };

        if let Some(request) = app.handle_event(event) {
            schedule_reveal(request, config.reveal_delay(), event_tx.clone());
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}

/// Forwards key presses from a blocking reader into the event channel.
///
/// Polls with a timeout so the task ends once the receiver is dropped.
fn spawn_input_forwarder(tx: mpsc::UnboundedSender<UiEvent>) {
    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            match event::poll(Duration::from_millis(100)) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) => {
                        if let Some(command) = command_for(key) {
                            let _ = tx.send(UiEvent::Input(command));
                        }
                    }
                    Ok(_) => {}
                    Err(e) => {
                        error!(error = %e, "Failed to read terminal event");
                        return;
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    error!(error = %e, "Failed to poll terminal events");
                    return;
                }
            }
        }
        debug!("Input forwarder stopped");
    });
}

/// Sends [`UiEvent::RevealSummary`] after `delay`.
pub fn schedule_reveal(
    request: ScheduleReveal,
    delay: Duration,
    tx: mpsc::UnboundedSender<UiEvent>,
) {
    debug!(round = request.round, ?delay, "Scheduling summary reveal");
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = tx.send(UiEvent::RevealSummary {
            round: request.round,
        });
    });
}

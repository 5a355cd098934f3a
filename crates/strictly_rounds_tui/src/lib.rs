//! Terminal front end for Strictly Rounds.
//!
//! Renders the board, turn indicator and scoreboard with ratatui, and shows
//! a round summary shortly after each round ends. All game state lives in
//! [`strictly_rounds::RoundEngine`], owned by [`App`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod runtime;
pub mod summary;
pub mod ui;

pub use app::{App, Modal, ScheduleReveal, UiEvent};
pub use cli::Cli;
pub use config::{ConfigError, TuiConfig};
pub use input::Command;
pub use summary::RoundSummary;

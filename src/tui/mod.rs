//! Terminal User Interface for series-heatmap using ratatui.
//!
//! This module provides a full-screen heatmap viewer with a stats panel,
//! episode details, and an interactive binge calculator.

mod render;
mod state;
mod types;

pub use render::draw;
pub use state::App;
pub use types::{Action, CalculatorField, Focus};

use crossterm::event::{self, Event};
use log::LevelFilter;
use std::io;
use std::time::Duration;

/// Poll for keyboard events with a timeout.
pub fn poll_event(timeout: Duration) -> io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Log level to use while the TUI owns the terminal.
///
/// Log lines written to stderr would draw over the frame, so logging is off
/// unless debug or trace output was asked for.
pub fn tui_log_level(requested: LevelFilter) -> LevelFilter {
    if requested >= LevelFilter::Debug {
        requested
    } else {
        LevelFilter::Off
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tui_log_level() {
        assert_eq!(tui_log_level(LevelFilter::Error), LevelFilter::Off);
        assert_eq!(tui_log_level(LevelFilter::Warn), LevelFilter::Off);
        assert_eq!(tui_log_level(LevelFilter::Info), LevelFilter::Off);
        assert_eq!(tui_log_level(LevelFilter::Debug), LevelFilter::Debug);
        assert_eq!(tui_log_level(LevelFilter::Trace), LevelFilter::Trace);
    }
}

//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::core::sample::SampleData;
use crate::core::state::App;

/// Creates a test App over fresh sample data.
pub fn test_app() -> App {
    App::new(SampleData::new())
}

/// An 80x24 terminal backed by an in-memory buffer.
pub fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 24)).expect("test backend never fails")
}

/// Every cell symbol of the last drawn frame, row-major, one line per row.
pub fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

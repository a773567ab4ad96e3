//! Interactive TUI
//!
//! The default way to play: a ratatui board driven by crossterm key events.

mod app;
mod rendering;

pub use app::{App, WordFetcher, run_tui};
pub use rendering::ui;

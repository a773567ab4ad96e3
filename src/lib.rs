//! Wordle Game
//!
//! A terminal Wordle: six attempts to guess a hidden five-letter word, with
//! per-letter feedback after every guess.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::Word;
//! use wordle_game::game::{Board, Outcome, Pacing};
//!
//! let mut board = Board::new(Pacing::instant());
//! board.start(Word::new("crane").unwrap());
//!
//! for letter in "crane".chars() {
//!     board.input(letter);
//! }
//! board.commit();
//! board.advance_to_end();
//!
//! assert_eq!(board.outcome(), Some(Outcome::Won));
//! ```

// Core domain types
pub mod core;

// Rows, board, outcome policy
pub mod game;

// Word lists and sources
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing subscriber setup
pub mod logging;

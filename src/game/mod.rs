//! Game state: guess rows and the board that coordinates them
//!
//! Nothing here touches the terminal or the network. Front ends feed key
//! input into the [`Board`] and drive evaluation with [`Board::advance`],
//! sleeping for whatever duration it asks for.

mod board;
mod row;

pub use board::{Board, Focus, Outcome, Statistics, Tick};
pub use row::{Cell, EvalStep, GuessRow, RowPhase, Verdict};

use std::time::Duration;

/// Number of guesses per game
pub const ROW_COUNT: usize = 6;

/// Delays used while revealing a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// How long a cell stays flipped before its status shows
    pub flip: Duration,
    /// Pause after a cell resolves, before the next one flips
    pub gap: Duration,
}

impl Pacing {
    #[must_use]
    pub const fn from_millis(flip: u64, gap: u64) -> Self {
        Self {
            flip: Duration::from_millis(flip),
            gap: Duration::from_millis(gap),
        }
    }

    /// No delays at all
    #[must_use]
    pub const fn instant() -> Self {
        Self::from_millis(0, 0)
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self::from_millis(300, 100)
    }
}

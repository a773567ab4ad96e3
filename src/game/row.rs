//! Guess row state machine
//!
//! A row accepts letters left to right, then evaluates them one cell at a
//! time. Evaluation is split into stages so the caller can pace the reveal:
//! each cell first flips (`animating`), then resolves, and every stage hands
//! back how long to wait before the next one.

use super::Pacing;
use crate::core::{Feedback, LetterStatus, WORD_LENGTH, Word, evaluate_letter};
use std::time::Duration;

/// One letter slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub letter: Option<u8>,
    pub status: LetterStatus,
    pub animating: bool,
}

impl Cell {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.letter.is_none()
    }

    /// Letter as an uppercase char, or a space when empty
    #[must_use]
    pub fn display_char(&self) -> char {
        self.letter.map_or(' ', char::from)
    }
}

/// Result of a fully evaluated row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Every cell resolved correct
    Solved,
    Missed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowPhase {
    Editing,
    /// `position` is the cell being revealed; `flipped` is set once it is animating
    Evaluating { position: usize, flipped: bool },
    Complete(Verdict),
}

/// What the caller should do after driving one evaluation stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalStep {
    /// Wait this long, then step again
    Wait(Duration),
    /// Evaluation finished with this verdict
    Done(Verdict),
    /// The row is not evaluating
    Idle,
}

#[derive(Debug, Clone)]
pub struct GuessRow {
    cells: [Cell; WORD_LENGTH],
    phase: RowPhase,
}

impl Default for GuessRow {
    fn default() -> Self {
        Self::new()
    }
}

impl GuessRow {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [Cell {
                letter: None,
                status: LetterStatus::Idle,
                animating: false,
            }; WORD_LENGTH],
            phase: RowPhase::Editing,
        }
    }

    #[must_use]
    pub const fn cells(&self) -> &[Cell; WORD_LENGTH] {
        &self.cells
    }

    #[must_use]
    pub const fn phase(&self) -> RowPhase {
        self.phase
    }

    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(self.phase, RowPhase::Editing)
    }

    #[must_use]
    pub const fn is_evaluating(&self) -> bool {
        matches!(self.phase, RowPhase::Evaluating { .. })
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }

    fn first_empty(&self) -> Option<usize> {
        self.cells.iter().position(Cell::is_empty)
    }

    /// Letters typed so far, uppercase
    #[must_use]
    pub fn text(&self) -> String {
        self.cells
            .iter()
            .filter_map(|c| c.letter.map(char::from))
            .collect()
    }

    /// Type a letter into the first empty cell
    ///
    /// Returns the cell that should receive focus next, or `None` when the
    /// input was rejected (not a letter, row full, or row not editing).
    pub fn input(&mut self, ch: char) -> Option<usize> {
        if !self.is_editing() || !ch.is_ascii_alphabetic() {
            return None;
        }

        let index = self.first_empty()?;
        // ASCII checked above, so the cast is lossless
        self.cells[index].letter = Some(ch.to_ascii_uppercase() as u8);

        Some(self.first_empty().unwrap_or(index))
    }

    /// Clear the last filled cell (the final cell when the row is full)
    ///
    /// Returns the cleared cell, which becomes the focus. No-op on an empty
    /// row or outside editing.
    pub fn delete(&mut self) -> Option<usize> {
        if !self.is_editing() {
            return None;
        }

        let index = match self.first_empty() {
            None => WORD_LENGTH - 1,
            Some(0) => return None,
            Some(first_empty) => first_empty - 1,
        };
        self.cells[index].letter = None;
        Some(index)
    }

    /// Start evaluating; a no-op returning `false` unless every cell is filled
    pub fn commit(&mut self) -> bool {
        if !self.is_editing() || !self.is_full() {
            return false;
        }
        self.phase = RowPhase::Evaluating {
            position: 0,
            flipped: false,
        };
        true
    }

    /// Drive one evaluation stage against `target`
    ///
    /// Stages run strictly left to right: flip cell `i` and wait
    /// `pacing.flip`, then resolve it and wait `pacing.gap`. After the last
    /// gap the row completes.
    pub fn step(&mut self, target: &Word, pacing: Pacing) -> EvalStep {
        let RowPhase::Evaluating { position, flipped } = self.phase else {
            return EvalStep::Idle;
        };

        if position == WORD_LENGTH {
            let verdict = if self
                .cells
                .iter()
                .all(|c| c.status == LetterStatus::Correct)
            {
                Verdict::Solved
            } else {
                Verdict::Missed
            };
            self.phase = RowPhase::Complete(verdict);
            return EvalStep::Done(verdict);
        }

        let cell = &mut self.cells[position];
        if flipped {
            // Full rows only reach evaluation, so every cell has a letter
            let letter = cell.letter.unwrap_or_default();
            cell.status = evaluate_letter(position, letter, target);
            cell.animating = false;
            self.phase = RowPhase::Evaluating {
                position: position + 1,
                flipped: false,
            };
            EvalStep::Wait(pacing.gap)
        } else {
            cell.animating = true;
            self.phase = RowPhase::Evaluating {
                position,
                flipped: true,
            };
            EvalStep::Wait(pacing.flip)
        }
    }

    /// Feedback for a completed row
    #[must_use]
    pub fn feedback(&self) -> Option<Feedback> {
        match self.phase {
            RowPhase::Complete(_) => Some(Feedback::from_statuses(self.cells.map(|c| c.status))),
            _ => None,
        }
    }

    /// Clear every cell and return to editing
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

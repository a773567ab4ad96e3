//! Board controller
//!
//! Owns the six guess rows, decides which one is active, and settles the
//! game outcome. Rows only report a verdict; the board alone moves the
//! active row and sets the outcome.

use super::row::{EvalStep, GuessRow, Verdict};
use super::{Pacing, ROW_COUNT};
use crate::core::Word;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// Where the cursor should go next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Focus {
    pub row: usize,
    pub cell: usize,
}

/// Result of [`Board::advance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// A row is mid-evaluation; call `advance` again after this delay
    Wait(Duration),
    /// Nothing to animate
    Idle,
}

/// Per-session results, kept in memory only
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    /// Indexed by the number of guesses a win took
    pub guess_distribution: [usize; ROW_COUNT + 1],
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}

#[derive(Debug, Clone)]
pub struct Board {
    target: Option<Word>,
    rows: [GuessRow; ROW_COUNT],
    active_row: usize,
    outcome: Option<Outcome>,
    focus: Option<Focus>,
    pacing: Pacing,
    stats: Statistics,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Pacing::default())
    }
}

impl Board {
    /// Create a board with no target yet; it stays loading until [`Board::start`]
    #[must_use]
    pub fn new(pacing: Pacing) -> Self {
        Self {
            target: None,
            rows: std::array::from_fn(|_| GuessRow::new()),
            active_row: 0,
            outcome: None,
            focus: None,
            pacing,
            stats: Statistics::default(),
        }
    }

    /// Install a target word and begin a fresh game
    pub fn start(&mut self, target: Word) {
        tracing::info!(length = target.text().len(), "starting game");
        tracing::debug!(word = %target, "target chosen");
        self.target = Some(target);
        self.reset();
    }

    /// Clear every row and the outcome, keeping the current target
    pub fn reset(&mut self) {
        self.active_row = 0;
        self.outcome = None;
        for row in &mut self.rows {
            row.reset();
        }
        self.focus = Some(Focus { row: 0, cell: 0 });
    }

    /// Reset and drop the target; the board loads until the next `start`
    pub fn begin_new_word(&mut self) {
        self.reset();
        self.target = None;
    }

    #[must_use]
    pub const fn target(&self) -> Option<&Word> {
        self.target.as_ref()
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.target.is_none()
    }

    #[must_use]
    pub const fn rows(&self) -> &[GuessRow; ROW_COUNT] {
        &self.rows
    }

    #[must_use]
    pub const fn active_row(&self) -> usize {
        self.active_row
    }

    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    /// The modal is up exactly when the game has an outcome
    #[must_use]
    pub const fn modal_visible(&self) -> bool {
        self.outcome.is_some()
    }

    /// Only the active row accepts input, and only while a game is running
    #[must_use]
    pub const fn is_row_enabled(&self, index: usize) -> bool {
        index == self.active_row && self.target.is_some() && self.outcome.is_none()
    }

    #[must_use]
    pub fn is_evaluating(&self) -> bool {
        self.rows[self.active_row].is_evaluating()
    }

    fn active_mut(&mut self) -> Option<&mut GuessRow> {
        if self.is_row_enabled(self.active_row) {
            Some(&mut self.rows[self.active_row])
        } else {
            None
        }
    }

    /// Type a letter into the active row
    pub fn input(&mut self, ch: char) -> bool {
        let row = self.active_row;
        let Some(cell) = self.active_mut().and_then(|r| r.input(ch)) else {
            return false;
        };
        self.focus = Some(Focus { row, cell });
        true
    }

    /// Delete the last letter of the active row
    pub fn delete(&mut self) -> bool {
        let row = self.active_row;
        let Some(cell) = self.active_mut().and_then(GuessRow::delete) else {
            return false;
        };
        self.focus = Some(Focus { row, cell });
        true
    }

    /// Submit the active row for evaluation; no-op unless it is full
    pub fn commit(&mut self) -> bool {
        let committed = self.active_mut().is_some_and(GuessRow::commit);
        if committed {
            tracing::debug!(row = self.active_row, "evaluating guess");
        }
        committed
    }

    /// Drive one evaluation stage of the active row
    pub fn advance(&mut self) -> Tick {
        let Some(target) = self.target.as_ref() else {
            return Tick::Idle;
        };

        match self.rows[self.active_row].step(target, self.pacing) {
            EvalStep::Wait(delay) => Tick::Wait(delay),
            EvalStep::Done(verdict) => {
                self.settle(verdict);
                Tick::Idle
            }
            EvalStep::Idle => Tick::Idle,
        }
    }

    /// Run the active row's evaluation to the end without pacing
    pub fn advance_to_end(&mut self) {
        while let Tick::Wait(_) = self.advance() {}
    }

    fn settle(&mut self, verdict: Verdict) {
        let guesses = self.active_row + 1;

        if verdict == Verdict::Solved {
            tracing::info!(guesses, "game won");
            self.finish(Outcome::Won);
            self.stats.games_won += 1;
            self.stats.guess_distribution[guesses] += 1;
        } else if self.active_row == ROW_COUNT - 1 {
            tracing::info!(guesses, "game lost");
            self.finish(Outcome::Lost);
        } else {
            self.active_row += 1;
            tracing::debug!(row = self.active_row, "advancing to next row");
            self.focus = Some(Focus {
                row: self.active_row,
                cell: 0,
            });
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        self.outcome = Some(outcome);
        self.stats.games_played += 1;
        self.focus = None;
    }

    /// Current focus request without consuming it
    #[must_use]
    pub const fn focus(&self) -> Option<Focus> {
        self.focus
    }

    /// Consume the pending focus request
    pub fn take_focus(&mut self) -> Option<Focus> {
        self.focus.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus;

    fn board(target: &str) -> Board {
        let mut board = Board::new(Pacing::instant());
        board.start(Word::new(target).unwrap());
        board
    }

    fn play(board: &mut Board, guess: &str) {
        for ch in guess.chars() {
            board.input(ch);
        }
        assert!(board.commit(), "commit rejected for {guess}");
        board.advance_to_end();
    }

    #[test]
    fn new_board_is_loading_and_rejects_input() {
        let mut board = Board::default();
        assert!(board.is_loading());
        assert!(!board.input('a'));
        assert!(!board.is_row_enabled(0));
        assert_eq!(board.advance(), Tick::Idle);
    }

    #[test]
    fn only_active_row_is_enabled() {
        let board = board("crane");
        assert!(board.is_row_enabled(0));
        for i in 1..ROW_COUNT {
            assert!(!board.is_row_enabled(i));
        }
    }

    #[test]
    fn non_winning_guess_advances_row() {
        let mut board = board("crane");
        play(&mut board, "crate");

        assert_eq!(board.active_row(), 1);
        assert_eq!(board.outcome(), None);
        assert_eq!(board.focus(), Some(Focus { row: 1, cell: 0 }));
        assert_eq!(
            board.rows()[0].cells().map(|c| c.status),
            [
                LetterStatus::Correct,
                LetterStatus::Correct,
                LetterStatus::Correct,
                LetterStatus::Absent,
                LetterStatus::Correct,
            ]
        );
        assert!(board.is_row_enabled(1));
        assert!(!board.is_row_enabled(0));
    }

    #[test]
    fn commit_with_empty_cell_is_noop() {
        let mut board = board("crane");
        for ch in "cra".chars() {
            board.input(ch);
        }
        assert!(!board.commit());
        assert!(!board.is_evaluating());
        assert_eq!(board.advance(), Tick::Idle);
        assert_eq!(board.active_row(), 0);
    }

    #[test]
    fn winning_guess_sets_outcome_and_blocks_input() {
        let mut board = board("crane");
        play(&mut board, "slate");
        play(&mut board, "CRANE");

        assert_eq!(board.outcome(), Some(Outcome::Won));
        assert!(board.modal_visible());
        assert!(!board.input('a'));
        assert!(!board.delete());
        assert!(!board.commit());
        assert!((0..ROW_COUNT).all(|i| !board.is_row_enabled(i)));

        let stats = board.stats();
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.guess_distribution[2], 1);
    }

    #[test]
    fn exhausting_rows_loses() {
        let mut board = board("crane");
        for guess in ["slate", "pious", "dumpy", "witch", "fjord", "bingo"] {
            assert_eq!(board.outcome(), None);
            play(&mut board, guess);
        }

        assert_eq!(board.outcome(), Some(Outcome::Lost));
        assert_eq!(board.active_row(), ROW_COUNT - 1);
        assert!(board.modal_visible());
        assert_eq!(board.stats().games_played, 1);
        assert_eq!(board.stats().games_won, 0);
    }

    #[test]
    fn win_on_final_row_is_a_win() {
        let mut board = board("crane");
        for guess in ["slate", "pious", "dumpy", "witch", "fjord", "crane"] {
            play(&mut board, guess);
        }
        assert_eq!(board.outcome(), Some(Outcome::Won));
        assert_eq!(board.stats().guess_distribution[6], 1);
    }

    #[test]
    fn input_ignored_while_evaluating() {
        let mut board = Board::new(Pacing::default());
        board.start(Word::new("crane").unwrap());
        for ch in "slate".chars() {
            board.input(ch);
        }
        board.commit();

        assert_eq!(board.advance(), Tick::Wait(Pacing::default().flip));
        assert!(board.is_evaluating());
        assert!(!board.delete());
        assert_eq!(board.rows()[0].text(), "SLATE");
    }

    #[test]
    fn input_and_delete_publish_focus() {
        let mut board = board("crane");
        board.take_focus();

        board.input('c');
        assert_eq!(board.take_focus(), Some(Focus { row: 0, cell: 1 }));
        assert_eq!(board.take_focus(), None);

        board.delete();
        assert_eq!(board.take_focus(), Some(Focus { row: 0, cell: 0 }));

        assert!(!board.delete());
        assert_eq!(board.take_focus(), None);
    }

    #[test]
    fn reset_restores_first_row_and_clears_cells() {
        let mut board = board("crane");
        play(&mut board, "slate");
        play(&mut board, "crane");
        board.reset();

        assert_eq!(board.active_row(), 0);
        assert_eq!(board.outcome(), None);
        assert!(!board.modal_visible());
        assert_eq!(board.focus(), Some(Focus { row: 0, cell: 0 }));
        assert!(board.rows().iter().all(|r| r.is_blank() && r.is_editing()));
        assert!(
            board
                .rows()
                .iter()
                .flat_map(GuessRow::cells)
                .all(|c| c.status == LetterStatus::Idle && !c.animating)
        );
        // Retry keeps the word
        assert_eq!(board.target().map(Word::text), Some("CRANE"));
        assert_eq!(board.stats().games_played, 1);
    }

    #[test]
    fn begin_new_word_drops_target() {
        let mut board = board("crane");
        play(&mut board, "crane");
        board.begin_new_word();

        assert!(board.is_loading());
        assert!(!board.modal_visible());
        assert!(!board.input('a'));

        board.start(Word::new("slate").unwrap());
        assert!(board.input('a'));
    }

    #[test]
    fn win_rate() {
        let mut stats = Statistics::default();
        assert!(stats.win_rate().abs() < f64::EPSILON);
        stats.games_played = 4;
        stats.games_won = 3;
        assert!((stats.win_rate() - 75.0).abs() < f64::EPSILON);
    }
}

//! Per-letter feedback for a guess
//!
//! Each guessed letter resolves independently:
//! - Correct: same letter at the same position in the target
//! - Present: letter appears somewhere else in the target
//! - Absent: letter does not appear in the target
//!
//! Repeated letters are not budgeted against the target's letter counts: a
//! guess with two `E`s against a target with one `E` can show both as
//! present.

use super::{WORD_LENGTH, Word};
use std::fmt;

/// Evaluation status of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterStatus {
    /// Not evaluated yet
    #[default]
    Idle,
    Correct,
    Present,
    Absent,
}

impl LetterStatus {
    /// Emoji square used when sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
            Self::Idle => '⬜',
        }
    }

    #[must_use]
    pub const fn is_resolved(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        };
        f.write_str(name)
    }
}

/// Resolve the status of `letter` guessed at `position` against `target`
///
/// # Panics
/// Panics if `position >= WORD_LENGTH`
///
/// # Examples
/// ```
/// use wordle_game::core::{LetterStatus, Word, evaluate_letter};
///
/// let target = Word::new("crane").unwrap();
/// assert_eq!(evaluate_letter(0, b'C', &target), LetterStatus::Correct);
/// assert_eq!(evaluate_letter(0, b'E', &target), LetterStatus::Present);
/// assert_eq!(evaluate_letter(0, b'T', &target), LetterStatus::Absent);
/// ```
#[must_use]
pub fn evaluate_letter(position: usize, letter: u8, target: &Word) -> LetterStatus {
    let letter = letter.to_ascii_uppercase();
    if target.letter_at(position) == letter {
        LetterStatus::Correct
    } else if target.contains(letter) {
        LetterStatus::Present
    } else {
        LetterStatus::Absent
    }
}

/// Resolved feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterStatus; WORD_LENGTH]);

impl Feedback {
    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, LetterStatus::*, Word};
    ///
    /// let target = Word::new("crane").unwrap();
    /// let guess = Word::new("crate").unwrap();
    /// let feedback = Feedback::calculate(&guess, &target);
    ///
    /// assert_eq!(feedback.statuses(), &[Correct, Correct, Correct, Absent, Correct]);
    /// assert!(!feedback.is_solved());
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut statuses = [LetterStatus::Idle; WORD_LENGTH];
        for (position, (status, &letter)) in
            statuses.iter_mut().zip(guess.letters()).enumerate()
        {
            *status = evaluate_letter(position, letter, target);
        }
        Self(statuses)
    }

    #[must_use]
    pub const fn from_statuses(statuses: [LetterStatus; WORD_LENGTH]) -> Self {
        Self(statuses)
    }

    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// True when every letter is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&s| s == LetterStatus::Correct)
    }

    #[must_use]
    pub fn count(&self, status: LetterStatus) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Convert to an emoji string like "🟩🟨⬛🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

//! Core domain types for Wordle
//!
//! Pure types with no I/O: the target word and the letter evaluation rules.

mod status;
mod word;

pub use status::{Feedback, LetterStatus, evaluate_letter};
pub use word::{WORD_LENGTH, Word, WordError};

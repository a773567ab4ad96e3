//! Single guess check
//!
//! Evaluates one guess against a known target without playing a game.

use crate::core::{Feedback, Word};

/// Result of checking a guess
pub struct CheckResult {
    pub target: Word,
    pub guess: Word,
    pub feedback: Feedback,
}

/// Evaluate `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is not a valid five-letter word.
pub fn check_guess(target: &str, guess: &str) -> Result<CheckResult, String> {
    let target = Word::new(target).map_err(|e| format!("Invalid target word: {e}"))?;
    let guess = Word::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let feedback = Feedback::calculate(&guess, &target);

    Ok(CheckResult {
        target,
        guess,
        feedback,
    })
}

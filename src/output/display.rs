//! Display functions for command results

use super::formatters::{create_progress_bar, letter_tile};
use crate::commands::CheckResult;
use crate::core::Word;
use crate::game::{Outcome, ROW_COUNT, Statistics};
use colored::Colorize;
use std::io::{self, Write};

/// Print the feedback for a single checked guess
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_check_result(out: &mut impl Write, result: &CheckResult) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(40).cyan())?;
    writeln!(
        out,
        "Guess {} against {}",
        result.guess.text().bright_white().bold(),
        result.target.text().bright_yellow().bold()
    )?;
    writeln!(out, "{}", "─".repeat(40).cyan())?;

    let tiles: String = result
        .guess
        .letters()
        .iter()
        .zip(result.feedback.statuses())
        .map(|(&letter, &status)| letter_tile(char::from(letter), status).to_string())
        .collect();
    writeln!(out, "\n  {tiles}")?;
    writeln!(out, "  {}", result.feedback.to_emoji())?;

    let statuses: Vec<String> = result
        .feedback
        .statuses()
        .iter()
        .map(ToString::to_string)
        .collect();
    writeln!(out, "\n  [{}]", statuses.join(", "))?;

    if result.feedback.is_solved() {
        writeln!(out, "\n{}", "✅ Solved!".green().bold())?;
    }
    Ok(())
}

/// Print the end-of-game banner
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_outcome(
    out: &mut impl Write,
    outcome: Outcome,
    target: &Word,
    guesses: usize,
) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(40).bright_cyan())?;
    match outcome {
        Outcome::Won => {
            writeln!(out, "{}", "    🎉  YOU WON!  🎉".bright_green().bold())?;
            writeln!(
                out,
                "    Solved in {} {}",
                guesses.to_string().bright_cyan().bold(),
                if guesses == 1 { "guess" } else { "guesses" }
            )?;
        }
        Outcome::Lost => {
            writeln!(out, "{}", "    YOU LOST...".red().bold())?;
            writeln!(out, "    The word was {}", target.text().bright_yellow().bold())?;
        }
    }
    writeln!(out, "{}", "═".repeat(40).bright_cyan())
}

/// Print session statistics with a guess distribution chart
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_statistics(out: &mut impl Write, stats: &Statistics) -> io::Result<()> {
    writeln!(
        out,
        "\n📊 Played: {}  Won: {}  Win rate: {:.0}%",
        stats.games_played,
        stats.games_won,
        stats.win_rate()
    )?;

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for guesses in 1..=ROW_COUNT {
        let count = stats.guess_distribution[guesses];
        let bar = create_progress_bar(count as f64, most as f64, 20);
        writeln!(out, "   {guesses}: {} {count}", bar.green())?;
    }
    Ok(())
}

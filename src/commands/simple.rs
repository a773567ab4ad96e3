//! Simple line-mode game
//!
//! Text-based game without the TUI: one guess per line, letters revealed
//! one at a time with the same pacing as the board.

use crate::core::WORD_LENGTH;
use crate::game::{Board, Pacing, ROW_COUNT, Tick};
use crate::output::formatters::letter_tile;
use crate::output::{print_outcome, print_statistics};
use crate::wordlists::{WordSource, pick_target};
use anyhow::{Result, anyhow};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

/// A line-mode game session over arbitrary input and output streams
pub struct SimpleGame<'a, R, W> {
    source: &'a dyn WordSource,
    input: R,
    output: W,
    board: Board,
}

impl<'a, R: BufRead, W: Write> SimpleGame<'a, R, W> {
    pub fn new(source: &'a dyn WordSource, input: R, output: W, pacing: Pacing) -> Self {
        Self {
            source,
            input,
            output,
            board: Board::new(pacing),
        }
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Play until the player quits or input ends
    ///
    /// # Errors
    ///
    /// Returns an error if the word list cannot be fetched or if reading
    /// input / writing output fails.
    pub fn run<G: Rng + ?Sized>(&mut self, rng: &mut G) -> Result<()> {
        writeln!(self.output, "\n╔══════════════════════════════════════╗")?;
        writeln!(self.output, "║          Wordle - Line Mode          ║")?;
        writeln!(self.output, "╚══════════════════════════════════════╝\n")?;
        writeln!(
            self.output,
            "Guess the {WORD_LENGTH}-letter word in {ROW_COUNT} tries. Type 'quit' to exit.\n"
        )?;

        self.load_target(rng)?;

        loop {
            if let Some(outcome) = self.board.outcome() {
                if let Some(target) = self.board.target() {
                    print_outcome(&mut self.output, outcome, target, self.board.active_row() + 1)?;
                }
                print_statistics(&mut self.output, self.board.stats())?;

                let Some(answer) = self.prompt("\nnew / retry / quit")? else {
                    return Ok(());
                };
                match answer.to_lowercase().as_str() {
                    "new" | "n" => {
                        self.board.begin_new_word();
                        self.load_target(rng)?;
                    }
                    "retry" | "r" => {
                        self.board.reset();
                        writeln!(self.output, "\n🔄 Same word, fresh board!\n")?;
                    }
                    "quit" | "q" | "exit" => {
                        self.goodbye()?;
                        return Ok(());
                    }
                    _ => writeln!(self.output, "Please answer new, retry or quit.")?,
                }
                continue;
            }

            let prompt = format!("Guess {}/{ROW_COUNT}", self.board.active_row() + 1);
            let Some(line) = self.prompt(&prompt)? else {
                return Ok(());
            };
            if matches!(line.to_lowercase().as_str(), "quit" | "q" | "exit") {
                self.goodbye()?;
                return Ok(());
            }
            self.play_line(&line)?;
        }
    }

    fn load_target<G: Rng + ?Sized>(&mut self, rng: &mut G) -> Result<()> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .map_err(|e| anyhow!(e))?,
        );
        spinner.set_message(format!("Fetching words from {}", self.source.describe()));
        spinner.enable_steady_tick(Duration::from_millis(80));

        let fetched = self.source.fetch();
        spinner.finish_and_clear();

        let words = fetched.inspect_err(|e| tracing::error!(error = %e, "word fetch failed"))?;
        let target = pick_target(&words, rng).ok_or_else(|| anyhow!("word list is empty"))?;
        self.board.start(target);
        writeln!(self.output, "🎯 New word chosen from {} candidates.\n", words.len())?;
        Ok(())
    }

    /// Type one line into the active row and reveal it
    fn play_line(&mut self, line: &str) -> io::Result<()> {
        let letters: Vec<char> = line.chars().filter(char::is_ascii_alphabetic).collect();
        if letters.len() != WORD_LENGTH {
            writeln!(self.output, "❌ Guess must be exactly {WORD_LENGTH} letters\n")?;
            return Ok(());
        }

        for letter in letters {
            self.board.input(letter);
        }
        if !self.board.commit() {
            return Ok(());
        }
        self.reveal()
    }

    /// Drive evaluation, printing each tile as it resolves
    fn reveal(&mut self) -> io::Result<()> {
        let row = self.board.active_row();
        let mut shown = 0;

        write!(self.output, "  ")?;
        loop {
            let tick = self.board.advance();
            let cells = self.board.rows()[row].cells();
            while shown < WORD_LENGTH && cells[shown].status.is_resolved() {
                let cell = cells[shown];
                write!(self.output, "{}", letter_tile(cell.display_char(), cell.status))?;
                self.output.flush()?;
                shown += 1;
            }
            match tick {
                Tick::Wait(delay) => thread::sleep(delay),
                Tick::Idle => break,
            }
        }

        let emoji = self.board.rows()[row]
            .feedback()
            .map(|f| f.to_emoji())
            .unwrap_or_default();
        writeln!(self.output, "  {emoji}\n")
    }

    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn goodbye(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n👋 Thanks for playing!\n")
    }
}

/// Run the line-mode game on stdin/stdout
///
/// # Errors
///
/// Returns an error if the word list cannot be fetched or on an I/O error.
pub fn run_simple(source: &dyn WordSource, pacing: Pacing) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut game = SimpleGame::new(source, stdin.lock(), stdout.lock(), pacing);
    game.run(&mut rand::rng())
}

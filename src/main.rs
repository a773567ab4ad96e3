//! Wordle Game - CLI
//!
//! Terminal Wordle with a full-screen TUI, a line mode, and a one-shot
//! guess checker.

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use wordle_game::{
    commands::{check_guess, run_simple},
    game::Pacing,
    interactive::{App, run_tui},
    logging::{LogTarget, init_logging},
    output::print_check_result,
    wordlists::{WordSource, source_from_name},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word source: 'http' (default), 'embedded', or path to a word file
    #[arg(short, long, global = true, default_value = "http")]
    source: String,

    /// Override the HTTP word list endpoint
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Milliseconds each tile spends flipping
    #[arg(long, global = true, default_value = "300")]
    flip_ms: u64,

    /// Milliseconds between a tile settling and the next one flipping
    #[arg(long, global = true, default_value = "100")]
    gap_ms: u64,

    /// Write logs to this file (the TUI logs nowhere otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Line-mode game without the TUI
    Simple,

    /// Score a single guess against a target word
    Check {
        /// The hidden word
        target: String,

        /// The guess to score
        guess: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let tui = matches!(command, Commands::Play);
    init_logging(LogTarget::select(cli.log_file.as_deref(), tui), cli.verbose)?;

    let pacing = Pacing::from_millis(cli.flip_ms, cli.gap_ms);

    match command {
        Commands::Play => run_play_command(&cli.source, cli.endpoint.as_deref(), pacing),
        Commands::Simple => {
            let source = source_from_name(&cli.source, cli.endpoint.as_deref());
            run_simple(&*source, pacing)
        }
        Commands::Check { target, guess } => run_check_command(&target, &guess),
    }
}

fn run_play_command(source: &str, endpoint: Option<&str>, pacing: Pacing) -> Result<()> {
    let source: Arc<dyn WordSource> = Arc::from(source_from_name(source, endpoint));
    let app = App::new(source, pacing);
    run_tui(app)
}

fn run_check_command(target: &str, guess: &str) -> Result<()> {
    let result = check_guess(target, guess).map_err(|e| anyhow!(e))?;
    print_check_result(&mut io::stdout(), &result)?;
    Ok(())
}

//! Logging setup
//!
//! The TUI owns the terminal, so it only logs when given a file. Line-mode
//! commands log to stderr. `RUST_LOG` overrides the default filter.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Where log output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
    /// Logging disabled
    Off,
}

impl<'a> LogTarget<'a> {
    /// Pick a target: an explicit file wins, otherwise stderr unless the
    /// terminal is taken over by the TUI
    #[must_use]
    pub fn select(log_file: Option<&'a Path>, tui: bool) -> Self {
        match log_file {
            Some(path) => Self::File(path),
            None if tui => Self::Off,
            None => Self::Stderr,
        }
    }
}

#[must_use]
pub fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("wordle_game=debug,info"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("wordle_game=info,warn"))
    }
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init_logging(target: LogTarget<'_>, verbose: bool) -> Result<()> {
    let writer = match target {
        LogTarget::Off => return Ok(()),
        LogTarget::Stderr => BoxMakeWriter::new(io::stderr),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
    };

    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(matches!(target, LogTarget::Stderr))
                .with_target(false)
                .compact(),
        )
        .try_init()?;

    Ok(())
}

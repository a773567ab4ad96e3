//! TUI application state and logic

use crate::core::Word;
use crate::game::{Board, Focus, Pacing, Tick};
use crate::wordlists::{SourceError, WordSource, pick_target};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

/// How long to block on input when nothing is animating
const IDLE_POLL: Duration = Duration::from_millis(100);

type FetchResult = std::result::Result<Vec<Word>, SourceError>;

/// Runs word fetches on a background thread so the UI keeps drawing
pub struct WordFetcher {
    source: Arc<dyn WordSource>,
    pending: Option<Receiver<FetchResult>>,
}

impl WordFetcher {
    #[must_use]
    pub fn new(source: Arc<dyn WordSource>) -> Self {
        Self {
            source,
            pending: None,
        }
    }

    /// Start a fetch; any fetch already in flight is abandoned
    pub fn request(&mut self) {
        let source = Arc::clone(&self.source);
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            // The receiver is gone if the request was superseded
            let _ = tx.send(source.fetch());
        });
        self.pending = Some(rx);
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Non-blocking check for a finished fetch
    pub fn poll(&mut self) -> Option<FetchResult> {
        let rx = self.pending.as_ref()?;
        match rx.try_recv() {
            Ok(result) => {
                self.pending = None;
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                tracing::error!("word fetch thread exited without a result");
                self.pending = None;
                None
            }
        }
    }
}

/// Application state
pub struct App {
    pub board: Board,
    /// Last focus request published by the board
    pub cursor: Option<Focus>,
    pub should_quit: bool,
    pub source_name: String,
    fetcher: WordFetcher,
    next_step: Option<Instant>,
}

impl App {
    #[must_use]
    pub fn new(source: Arc<dyn WordSource>, pacing: Pacing) -> Self {
        let source_name = source.describe();
        Self {
            board: Board::new(pacing),
            cursor: None,
            should_quit: false,
            source_name,
            fetcher: WordFetcher::new(source),
            next_step: None,
        }
    }

    /// Ask the word source for a fresh list
    pub fn request_word(&mut self) {
        tracing::info!(source = %self.source_name, "requesting word list");
        self.fetcher.request();
    }

    /// Install a target once the background fetch finishes
    ///
    /// A failed fetch is logged and leaves the board loading.
    pub fn poll_words(&mut self) {
        match self.fetcher.poll() {
            Some(Ok(words)) => match pick_target(&words, &mut rand::rng()) {
                Some(target) => {
                    self.board.start(target);
                    self.sync_cursor();
                }
                None => tracing::error!("word list was empty"),
            },
            Some(Err(e)) => tracing::error!(error = %e, "failed to fetch word list"),
            None => {}
        }
    }

    #[must_use]
    pub const fn is_fetching(&self) -> bool {
        self.fetcher.is_pending()
    }

    /// Run any evaluation stage that is due
    pub fn on_tick(&mut self, now: Instant) {
        let Some(due) = self.next_step else {
            return;
        };
        if now < due {
            return;
        }

        self.next_step = match self.board.advance() {
            Tick::Wait(delay) => Some(now + delay),
            Tick::Idle => None,
        };
        self.sync_cursor();
    }

    /// How long the event loop may block waiting for input
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.next_step
            .map_or(IDLE_POLL, |due| due.saturating_duration_since(now))
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.board.modal_visible() {
            match key.code {
                KeyCode::Char('n' | 'N') => self.new_word(),
                KeyCode::Char('r' | 'R') => self.retry(),
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) => {
                self.board.input(c);
            }
            KeyCode::Backspace => {
                self.board.delete();
            }
            KeyCode::Enter => {
                if self.board.commit() {
                    self.next_step = Some(now);
                }
            }
            _ => {}
        }
        self.sync_cursor();
    }

    /// "New Word": reset, then fetch a fresh target
    pub fn new_word(&mut self) {
        self.board.begin_new_word();
        self.next_step = None;
        self.sync_cursor();
        self.request_word();
    }

    /// "Retry": reset and keep the target
    pub fn retry(&mut self) {
        self.board.reset();
        self.next_step = None;
        self.sync_cursor();
    }

    fn sync_cursor(&mut self) {
        if let Some(focus) = self.board.take_focus() {
            self.cursor = Some(focus);
        }
        if self.board.modal_visible() || self.board.is_loading() {
            self.cursor = None;
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "tui exited with error");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.request_word();

    loop {
        app.poll_words();
        app.on_tick(Instant::now());

        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Only process key press events (fixes Windows double-input bug)
        if event::poll(app.poll_timeout(Instant::now()))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key, Instant::now());
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Outcome, ROW_COUNT};
    use crate::wordlists::loader::words_from_slice;

    struct FixedSource(&'static [&'static str]);

    impl WordSource for FixedSource {
        fn fetch(&self) -> FetchResult {
            Ok(words_from_slice(self.0))
        }

        fn describe(&self) -> String {
            "fixed list".to_string()
        }
    }

    struct FailingSource;

    impl WordSource for FailingSource {
        fn fetch(&self) -> FetchResult {
            Err(SourceError::Empty {
                origin: self.describe(),
            })
        }

        fn describe(&self) -> String {
            "broken".to_string()
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn wait_for_fetch(app: &mut App) {
        for _ in 0..500 {
            app.poll_words();
            if !app.is_fetching() {
                return;
            }
            thread::sleep(Duration::from_millis(5));
        }
        panic!("word fetch did not finish");
    }

    fn loaded_app(pacing: Pacing) -> App {
        let mut app = App::new(Arc::new(FixedSource(&["crane"])), pacing);
        app.request_word();
        wait_for_fetch(&mut app);
        app
    }

    fn type_word(app: &mut App, word: &str) {
        let now = Instant::now();
        for c in word.chars() {
            app.handle_key(press(KeyCode::Char(c)), now);
        }
        app.handle_key(press(KeyCode::Enter), now);
    }

    fn finish_evaluation(app: &mut App) {
        let mut now = Instant::now();
        while app.next_step.is_some() {
            now += app.poll_timeout(now);
            app.on_tick(now);
        }
    }

    #[test]
    fn fetch_installs_target() {
        let app = loaded_app(Pacing::instant());

        assert_eq!(app.board.target().map(Word::text), Some("CRANE"));
        assert_eq!(app.cursor, Some(Focus { row: 0, cell: 0 }));
    }

    #[test]
    fn failed_fetch_stays_loading() {
        let mut app = App::new(Arc::new(FailingSource), Pacing::instant());
        app.request_word();
        wait_for_fetch(&mut app);

        assert!(app.board.is_loading());
        assert!(app.cursor.is_none());
    }

    #[test]
    fn typing_moves_cursor() {
        let mut app = loaded_app(Pacing::instant());
        let now = Instant::now();
        app.handle_key(press(KeyCode::Char('s')), now);
        app.handle_key(press(KeyCode::Char('1')), now);
        app.handle_key(press(KeyCode::Char('l')), now);

        assert_eq!(app.board.rows()[0].text(), "SL");
        assert_eq!(app.cursor, Some(Focus { row: 0, cell: 2 }));

        app.handle_key(press(KeyCode::Backspace), now);
        assert_eq!(app.cursor, Some(Focus { row: 0, cell: 1 }));
    }

    #[test]
    fn enter_on_partial_row_does_nothing() {
        let mut app = loaded_app(Pacing::instant());
        type_word(&mut app, "cra");

        assert!(app.next_step.is_none());
        assert!(!app.board.is_evaluating());
    }

    #[test]
    fn evaluation_is_paced_by_ticks() {
        let pacing = Pacing::default();
        let mut app = loaded_app(pacing);
        type_word(&mut app, "slate");

        let start = Instant::now();
        assert_eq!(app.poll_timeout(start), Duration::ZERO);

        app.on_tick(start);
        assert!(app.board.rows()[0].cells()[0].animating);
        assert_eq!(app.poll_timeout(start), pacing.flip);

        // Not due yet: nothing changes
        app.on_tick(start + pacing.flip / 2);
        assert!(app.board.rows()[0].cells()[0].animating);

        // Keys are ignored mid-evaluation
        app.handle_key(press(KeyCode::Backspace), start);
        assert_eq!(app.board.rows()[0].text(), "SLATE");

        finish_evaluation(&mut app);
        assert_eq!(app.board.active_row(), 1);
        assert_eq!(app.cursor, Some(Focus { row: 1, cell: 0 }));
    }

    #[test]
    fn win_shows_modal_and_retry_resets() {
        let mut app = loaded_app(Pacing::instant());
        type_word(&mut app, "crane");
        finish_evaluation(&mut app);

        assert_eq!(app.board.outcome(), Some(Outcome::Won));
        assert!(app.board.modal_visible());
        assert!(app.cursor.is_none());

        // Letters no longer reach the board
        app.handle_key(press(KeyCode::Char('a')), Instant::now());
        assert!(app.board.rows()[1].is_blank());

        app.handle_key(press(KeyCode::Char('r')), Instant::now());
        assert!(!app.board.modal_visible());
        assert_eq!(app.board.active_row(), 0);
        assert_eq!(app.board.target().map(Word::text), Some("CRANE"));
        assert!(app.board.rows().iter().all(|r| r.is_blank()));
    }

    #[test]
    fn losing_then_new_word_refetches() {
        let mut app = loaded_app(Pacing::instant());
        for _ in 0..ROW_COUNT {
            type_word(&mut app, "slate");
            finish_evaluation(&mut app);
        }
        assert_eq!(app.board.outcome(), Some(Outcome::Lost));

        app.handle_key(press(KeyCode::Char('n')), Instant::now());
        assert!(app.board.is_loading());
        assert!(app.is_fetching());

        wait_for_fetch(&mut app);
        assert!(!app.board.is_loading());
        assert_eq!(app.board.outcome(), None);
    }

    #[test]
    fn quit_keys() {
        let mut app = loaded_app(Pacing::instant());
        app.handle_key(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Instant::now(),
        );
        assert!(app.should_quit);

        let mut app = loaded_app(Pacing::instant());
        app.handle_key(press(KeyCode::Char('q')), Instant::now());
        assert!(!app.should_quit, "q is a letter while playing");
        app.handle_key(press(KeyCode::Esc), Instant::now());
        assert!(app.should_quit);
    }
}

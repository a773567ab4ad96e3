//! Word sources
//!
//! A [`WordSource`] hands back the full candidate list; the game then picks
//! one target at random with [`pick_target`]. Fetching is blocking, so front
//! ends that must stay responsive run it on a background thread.

use super::WORDS;
use super::loader::{load_from_file, words_from_iter, words_from_slice};
use crate::core::Word;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Word list endpoint served alongside the web build of the game
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5173/api/api/fe/wordle-words";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("word list request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{origin} returned no usable words")]
    Empty { origin: String },
}

/// Anything that can produce a list of candidate target words
pub trait WordSource: Send + Sync {
    /// Fetch the full candidate list
    ///
    /// # Errors
    ///
    /// Returns `SourceError` when the list cannot be retrieved or contains no
    /// valid words.
    fn fetch(&self) -> Result<Vec<Word>, SourceError>;

    /// Short human-readable description, used in logs
    fn describe(&self) -> String;
}

/// Fetches a JSON array of strings over HTTP
#[derive(Debug, Clone)]
pub struct HttpSource {
    endpoint: String,
}

impl HttpSource {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl WordSource for HttpSource {
    fn fetch(&self) -> Result<Vec<Word>, SourceError> {
        tracing::debug!(endpoint = %self.endpoint, "fetching word list");

        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let entries: Vec<String> = client
            .get(&self.endpoint)
            .send()?
            .error_for_status()?
            .json()?;

        non_empty(words_from_iter(entries), || self.describe())
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}

/// The list compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl WordSource for EmbeddedSource {
    fn fetch(&self) -> Result<Vec<Word>, SourceError> {
        non_empty(words_from_slice(WORDS), || self.describe())
    }

    fn describe(&self) -> String {
        "embedded word list".to_string()
    }
}

/// A plain-text file with one word per line
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordSource for FileSource {
    fn fetch(&self) -> Result<Vec<Word>, SourceError> {
        let words = load_from_file(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        non_empty(words, || self.describe())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

fn non_empty(words: Vec<Word>, origin: impl FnOnce() -> String) -> Result<Vec<Word>, SourceError> {
    if words.is_empty() {
        Err(SourceError::Empty { origin: origin() })
    } else {
        tracing::debug!(count = words.len(), "word list loaded");
        Ok(words)
    }
}

/// Build a source from its command-line name
///
/// - `"http"`: the HTTP endpoint (`endpoint` overrides the default)
/// - `"embedded"`: the list compiled into the binary
/// - anything else: a path to a word file
#[must_use]
pub fn source_from_name(name: &str, endpoint: Option<&str>) -> Box<dyn WordSource> {
    match name {
        "http" => Box::new(HttpSource::new(endpoint.unwrap_or(DEFAULT_ENDPOINT))),
        "embedded" => Box::new(EmbeddedSource),
        path => Box::new(FileSource::new(path)),
    }
}

/// Pick one target uniformly at random
///
/// # Examples
/// ```
/// use wordle_game::wordlists::{EmbeddedSource, WordSource, pick_target};
///
/// let words = EmbeddedSource.fetch().unwrap();
/// let target = pick_target(&words, &mut rand::rng()).unwrap();
/// assert!(words.contains(&target));
/// ```
pub fn pick_target<R: Rng + ?Sized>(words: &[Word], rng: &mut R) -> Option<Word> {
    words.choose(rng).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Write;

    #[test]
    fn http_source_parses_json_array() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/api/fe/wordle-words");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"["crane", "SLATE", "toolong", "pi3ce"]"#);
        });

        let source = HttpSource::new(server.url("/api/api/fe/wordle-words"));
        let words = source.fetch().unwrap();

        mock.assert();
        assert_eq!(
            words.iter().map(Word::text).collect::<Vec<_>>(),
            ["CRANE", "SLATE"]
        );
    }

    #[test]
    fn http_source_reports_server_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/words");
            then.status(500);
        });

        let err = HttpSource::new(server.url("/words")).fetch().unwrap_err();
        assert!(matches!(err, SourceError::Http(_)));
    }

    #[test]
    fn http_source_rejects_list_without_valid_words() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/words");
            then.status(200).body(r#"["no", "nope!"]"#);
        });

        let err = HttpSource::new(server.url("/words")).fetch().unwrap_err();
        assert!(matches!(err, SourceError::Empty { .. }));
    }

    #[test]
    fn http_source_rejects_malformed_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/words");
            then.status(200).body("{\"words\": 3}");
        });

        assert!(HttpSource::new(server.url("/words")).fetch().is_err());
    }

    #[test]
    fn embedded_source_returns_all_words() {
        assert_eq!(EmbeddedSource.fetch().unwrap().len(), WORDS.len());
    }

    #[test]
    fn file_source_reads_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "crane\nslate").unwrap();

        let words = FileSource::new(file.path()).fetch().unwrap();
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn file_source_missing_file() {
        let err = FileSource::new("/no/such/words.txt").fetch().unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
        assert!(err.to_string().contains("/no/such/words.txt"));
    }

    #[test]
    fn source_from_name_variants() {
        assert_eq!(
            source_from_name("embedded", None).describe(),
            "embedded word list"
        );
        assert_eq!(source_from_name("http", None).describe(), DEFAULT_ENDPOINT);
        assert_eq!(
            source_from_name("http", Some("http://example.test/w")).describe(),
            "http://example.test/w"
        );
        assert_eq!(
            source_from_name("lists/words.txt", None).describe(),
            "lists/words.txt"
        );
    }

    #[test]
    fn pick_target_from_list() {
        let words = words_from_slice(&["crane", "slate", "irate"]);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let target = pick_target(&words, &mut rng).unwrap();
            assert!(words.contains(&target));
        }
        assert!(pick_target(&[], &mut rng).is_none());
    }
}

//! Word lists and the sources that provide them
//!
//! The game needs one list of candidate targets per fetch. It can come from
//! an HTTP endpoint (the default), the list embedded in the binary, or a
//! plain-text file.

mod embedded;
pub mod loader;
pub mod source;

pub use embedded::{WORDS, WORDS_COUNT};
pub use source::{
    DEFAULT_ENDPOINT, EmbeddedSource, FileSource, HttpSource, SourceError, WordSource, pick_target,
    source_from_name,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_words_are_unique() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }
}

//! Stop-word sets.
//!
//! English stop words come from the NLTK list bundled with the `stop-words`
//! crate; Korean stop words are read from a whitespace-separated file.
//! Both loaders return an immutable [`StopWords`] that is built once per run.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::debug;
use stop_words::LANGUAGE;

use crate::error::{Error, Result};

/// Immutable set of stop words. Lookups are exact string matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords(HashSet<String>);

impl StopWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(words.into_iter().map(Into::into).collect())
    }

    /// Splits `content` on any whitespace and collects the pieces.
    pub fn parse(content: &str) -> Self {
        Self::new(content.split_whitespace())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(word)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The bundled English (NLTK) stop-word list.
pub fn english() -> StopWords {
    let words = StopWords::new(
        stop_words::get(LANGUAGE::English)
            .into_iter()
            .map(|s| s.to_string()),
    );
    debug!("Loaded {} English stop words", words.len());
    words
}

/// Reads a whitespace-separated Korean stop-word file.
pub fn load_korean(path: &Path) -> Result<StopWords> {
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let words = StopWords::parse(&content);
    debug!(
        "Loaded {} Korean stop words from {}",
        words.len(),
        path.display()
    );
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_on_any_whitespace() {
        let stop = StopWords::parse("은 는\n이\t가\r\n\n을 ");
        assert_eq!(stop.len(), 5);
        for w in ["은", "는", "이", "가", "을"] {
            assert!(stop.contains(w));
        }
        assert!(!stop.contains(""));
    }

    #[test]
    fn lookup_is_exact() {
        let stop = StopWords::new(["the"]);
        assert!(stop.contains("the"));
        assert!(!stop.contains("The"));
        assert!(!stop.contains("them"));
    }

    #[test]
    fn english_list_has_common_function_words() {
        let stop = english();
        for w in ["the", "and", "a", "of", "is"] {
            assert!(stop.contains(w), "missing {w}");
        }
        assert!(!stop.contains("fox"));
    }

    #[test]
    fn missing_korean_file_is_an_io_error() {
        let err = load_korean(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}

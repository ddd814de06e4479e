use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Morphological analyzer error: {0}")]
    Analyzer(String),

    #[error("{}: expected {expected} text, detected {detected}", .path.display())]
    Language {
        path: PathBuf,
        expected: &'static str,
        detected: String,
    },

    #[error("Export error: {0}")]
    Export(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

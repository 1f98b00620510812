//! Error taxonomy for vocabulary and corpus persistence

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing tokenizer state
#[derive(Debug, Error)]
pub enum TokenizerError {
    /// A file could not be read, created or written
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A vocabulary or configuration file holds malformed JSON
    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A vocabulary mapping whose ids are not a dense `0..n` permutation
    #[error("Invalid vocabulary: {0}")]
    InvalidVocabulary(String),
}

impl TokenizerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` for errors caused by malformed persisted content
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::InvalidVocabulary(_))
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, TokenizerError>;

//! File locations shared by both tokenizer variants
//!
//! Paths are passed in explicitly at construction so the tokenizers never
//! reach for process-wide state.

use crate::error::{Result, TokenizerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default corpus file name
pub const DEFAULT_CORPUS_FILE: &str = "corpus.txt";
/// Default vocabulary file name
pub const DEFAULT_VOCAB_FILE: &str = "vocab.json";

/// Where the corpus and the vocabulary live on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// Plain-text corpus the vocabulary is built from
    pub corpus_path: PathBuf,
    /// JSON vocabulary file, rewritten on every save
    pub vocab_path: PathBuf,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            corpus_path: PathBuf::from(DEFAULT_CORPUS_FILE),
            vocab_path: PathBuf::from(DEFAULT_VOCAB_FILE),
        }
    }
}

impl TokenizerConfig {
    /// Create a configuration from explicit paths
    pub fn new(corpus_path: impl Into<PathBuf>, vocab_path: impl Into<PathBuf>) -> Self {
        Self {
            corpus_path: corpus_path.into(),
            vocab_path: vocab_path.into(),
        }
    }

    /// Use the default file names inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(dir.join(DEFAULT_CORPUS_FILE), dir.join(DEFAULT_VOCAB_FILE))
    }

    /// Load configuration from a JSON file
    ///
    /// # Example
    /// ```no_run
    /// use wordtok::TokenizerConfig;
    /// use std::path::Path;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = TokenizerConfig::from_file(Path::new("wordtok.json"))?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| TokenizerError::io(path, e))?;
        serde_json::from_str(&content).map_err(|source| TokenizerError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

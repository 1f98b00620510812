//! Vocabulary management

use crate::error::{Result, TokenizerError};
use indexmap::IndexMap;
use std::collections::HashMap;

/// Vocabulary mapping between words and IDs
///
/// Maintains bidirectional mappings:
/// - word -> ID (for encoding)
/// - ID -> word (for decoding)
///
/// IDs are handed out by a counter starting at 0 and are never renumbered,
/// so the assigned IDs always form the dense range `0..len`.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// Mapping from word to ID
    token_to_id: HashMap<String, u32>,
    /// Mapping from ID to word
    id_to_token: HashMap<u32, String>,
    /// Next available ID for new words
    next_id: u32,
}

impl Vocabulary {
    /// Create a new empty vocabulary
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a word to the vocabulary
    ///
    /// Returns the ID assigned to the word. If the word already exists,
    /// returns its existing ID and leaves the vocabulary untouched.
    pub fn insert(&mut self, token: &str) -> u32 {
        if let Some(&id) = self.token_to_id.get(token) {
            return id;
        }

        let id = self.next_id;
        self.token_to_id.insert(token.to_string(), id);
        self.id_to_token.insert(id, token.to_string());
        self.next_id += 1;
        id
    }

    /// Get the ID for a word
    pub fn token_to_id(&self, token: &str) -> Option<u32> {
        self.token_to_id.get(token).copied()
    }

    /// Get the word for an ID
    pub fn id_to_token(&self, id: u32) -> Option<&str> {
        self.id_to_token.get(&id).map(String::as_str)
    }

    /// Check if a word exists in the vocabulary
    pub fn contains_token(&self, token: &str) -> bool {
        self.token_to_id.contains_key(token)
    }

    /// Check if an ID exists in the vocabulary
    pub fn contains_id(&self, id: u32) -> bool {
        self.id_to_token.contains_key(&id)
    }

    /// Number of words in the vocabulary
    pub fn len(&self) -> usize {
        self.token_to_id.len()
    }

    /// Check if the vocabulary is empty
    pub fn is_empty(&self) -> bool {
        self.token_to_id.is_empty()
    }

    /// The ID the next new word will receive
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    /// Replace the vocabulary with a persisted word -> ID mapping
    ///
    /// The IDs must be exactly the dense range `0..n` with every ID used once.
    /// On failure the current contents are left as they were.
    pub fn load<I>(&mut self, mapping: I) -> Result<()>
    where
        I: IntoIterator<Item = (String, u32)>,
    {
        let mut token_to_id = HashMap::new();
        let mut id_to_token = HashMap::new();

        for (token, id) in mapping {
            if let Some(previous) = id_to_token.get(&id) {
                return Err(TokenizerError::InvalidVocabulary(format!(
                    "id {id} is assigned to both {previous:?} and {token:?}"
                )));
            }
            if token_to_id.contains_key(&token) {
                return Err(TokenizerError::InvalidVocabulary(format!(
                    "word {token:?} appears more than once"
                )));
            }
            id_to_token.insert(id, token.clone());
            token_to_id.insert(token, id);
        }

        let len = u32::try_from(token_to_id.len()).map_err(|_| {
            TokenizerError::InvalidVocabulary("more words than the id space holds".to_string())
        })?;
        if let Some(&max_id) = id_to_token.keys().max() {
            if max_id >= len {
                return Err(TokenizerError::InvalidVocabulary(format!(
                    "ids are not dense: found id {max_id} with only {len} words"
                )));
            }
        }

        self.token_to_id = token_to_id;
        self.id_to_token = id_to_token;
        self.next_id = len;
        Ok(())
    }

    /// Forward mapping for persistence, ordered by ID
    pub fn serialize(&self) -> IndexMap<String, u32> {
        (0..self.next_id)
            .filter_map(|id| self.id_to_token.get(&id).map(|token| (token.clone(), id)))
            .collect()
    }

    /// Forget every word whose ID is `>= len`
    ///
    /// Used to undo insertions that could not be persisted. Since IDs are
    /// dense, the result is exactly the vocabulary as it was at size `len`.
    pub fn truncate(&mut self, len: usize) {
        let len = u32::try_from(len).unwrap_or(u32::MAX);
        if len >= self.next_id {
            return;
        }
        for id in len..self.next_id {
            if let Some(token) = self.id_to_token.remove(&id) {
                self.token_to_id.remove(&token);
            }
        }
        self.next_id = len;
    }
}

//! Static-vocabulary tokenizer
//!
//! The vocabulary is built by [`StaticTokenizer::fit`] and never grows while
//! encoding. Words that were not seen during fitting encode to
//! [`UNKNOWN_ID`](crate::UNKNOWN_ID).

use crate::config::TokenizerConfig;
use crate::error::Result;
use crate::normalize::Normalizer;
use crate::persist;
use crate::vocab::Vocabulary;
use crate::{decode_with, TokenId, UNKNOWN_ID};
use std::path::Path;

const NORMALIZER: Normalizer = Normalizer::StripPunctuation;

/// Tokenizer with a vocabulary fixed after fitting
#[derive(Debug, Clone, Default)]
pub struct StaticTokenizer {
    vocab: Vocabulary,
}

impl StaticTokenizer {
    /// Create a tokenizer with an empty vocabulary
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the vocabulary from the configured corpus and overwrite the
    /// vocabulary file
    ///
    /// # Errors
    /// Returns an error if the corpus cannot be read or the vocabulary file
    /// cannot be written.
    pub fn bootstrap(config: &TokenizerConfig) -> Result<Self> {
        tracing::info!(corpus = %config.corpus_path.display(), "building vocabulary from corpus");
        let corpus = persist::read_corpus(&config.corpus_path)?;

        let mut tokenizer = Self::new();
        tokenizer.fit(&corpus);
        tokenizer.save_vocab(&config.vocab_path)?;

        tracing::info!(
            words = tokenizer.vocab_size(),
            vocab = %config.vocab_path.display(),
            "vocabulary saved"
        );
        Ok(tokenizer)
    }

    /// Load a tokenizer from a previously saved vocabulary file
    pub fn from_vocab_file(path: &Path) -> Result<Self> {
        let mapping = persist::load_vocabulary(path)?;
        let mut vocab = Vocabulary::new();
        vocab.load(mapping)?;
        Ok(Self { vocab })
    }

    /// Add every word of `corpus` to the vocabulary in document order
    ///
    /// Calling this again with another corpus only appends new words;
    /// existing IDs never change.
    pub fn fit(&mut self, corpus: &str) {
        for token in NORMALIZER.normalize(corpus) {
            self.vocab.insert(&token);
        }
    }

    /// Encode text to IDs, using [`UNKNOWN_ID`] for unseen words
    pub fn encode(&self, text: &str) -> Vec<TokenId> {
        NORMALIZER
            .normalize(text)
            .iter()
            .map(|token| {
                self.vocab
                    .token_to_id(token)
                    .map_or(UNKNOWN_ID, TokenId::from)
            })
            .collect()
    }

    /// Encode a batch of texts
    pub fn encode_batch(&self, texts: &[&str]) -> Vec<Vec<TokenId>> {
        texts.iter().map(|text| self.encode(text)).collect()
    }

    /// Decode IDs to space-joined words, using `<UNK>` for unmapped IDs
    pub fn decode(&self, ids: &[TokenId]) -> String {
        decode_with(&self.vocab, ids)
    }

    /// Decode a batch of ID sequences
    pub fn decode_batch(&self, ids_batch: &[Vec<TokenId>]) -> Vec<String> {
        ids_batch.iter().map(|ids| self.decode(ids)).collect()
    }

    /// Write the vocabulary to `path`
    pub fn save_vocab(&self, path: &Path) -> Result<()> {
        persist::save_vocabulary(&self.vocab.serialize(), path)
    }

    /// Get vocabulary size
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    /// Borrow the underlying vocabulary
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_assigns_ids_in_document_order() {
        let mut tokenizer = StaticTokenizer::new();
        tokenizer.fit("the cat sat on the mat");

        let vocab = tokenizer.vocabulary();
        assert_eq!(vocab.token_to_id("the"), Some(0));
        assert_eq!(vocab.token_to_id("cat"), Some(1));
        assert_eq!(vocab.token_to_id("mat"), Some(4));
        assert_eq!(tokenizer.vocab_size(), 5);
    }

    #[test]
    fn test_fit_twice_only_grows() {
        let mut tokenizer = StaticTokenizer::new();
        tokenizer.fit("the cat sat");
        tokenizer.fit("the dog ran");

        assert_eq!(tokenizer.encode("the cat sat dog ran"), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_encode_unknown_and_decode_unk() {
        let mut tokenizer = StaticTokenizer::new();
        tokenizer.fit("the cat sat");

        let ids = tokenizer.encode("the dog sat");
        assert_eq!(ids, vec![0, -1, 2]);
        assert_eq!(tokenizer.decode(&ids), "the <UNK> sat");
    }

    #[test]
    fn test_encode_strips_punctuation() {
        let mut tokenizer = StaticTokenizer::new();
        tokenizer.fit("Hello, world! It's fine.");

        assert_eq!(tokenizer.encode("hello world"), vec![-1, 1]);
        assert_eq!(tokenizer.encode("Hello... world?! It's"), vec![0, 1, 2]);
    }

    #[test]
    fn test_encode_does_not_grow_vocab() {
        let mut tokenizer = StaticTokenizer::new();
        tokenizer.fit("a b");
        let _ = tokenizer.encode("c d e");
        assert_eq!(tokenizer.vocab_size(), 2);
    }

    #[test]
    fn test_empty_input() {
        let mut tokenizer = StaticTokenizer::new();
        tokenizer.fit("some words");
        assert!(tokenizer.encode("").is_empty());
        assert_eq!(tokenizer.decode(&[]), "");
    }
}

//! Dynamic-vocabulary tokenizer
//!
//! Every word is encodable: unknown words receive the next free ID during
//! [`DynamicTokenizer::encode`]. Each call that discovers new words appends
//! them to the corpus log and rewrites the vocabulary file before returning.
//!
//! Mutation requires `&mut self`, so within one process there is a single
//! writer. Separate processes sharing the same files are not coordinated.

use crate::config::TokenizerConfig;
use crate::error::Result;
use crate::normalize::Normalizer;
use crate::persist;
use crate::vocab::Vocabulary;
use crate::{decode_with, TokenId};

const NORMALIZER: Normalizer = Normalizer::Whitespace;

/// Tokenizer whose vocabulary grows as it encodes
#[derive(Debug, Clone)]
pub struct DynamicTokenizer {
    vocab: Vocabulary,
    config: TokenizerConfig,
}

impl DynamicTokenizer {
    /// Create a tokenizer with an empty vocabulary persisting to `config`
    pub fn new(config: TokenizerConfig) -> Self {
        Self {
            vocab: Vocabulary::new(),
            config,
        }
    }

    /// Rebuild the vocabulary from the configured corpus and overwrite the
    /// vocabulary file
    ///
    /// # Errors
    /// Returns an error if the corpus cannot be read or the vocabulary file
    /// cannot be written.
    pub fn bootstrap(config: TokenizerConfig) -> Result<Self> {
        tracing::info!(corpus = %config.corpus_path.display(), "building vocabulary from corpus");
        let corpus = persist::read_corpus(&config.corpus_path)?;

        let mut tokenizer = Self::new(config);
        tokenizer.fit(&corpus);
        tokenizer.save_vocab()?;

        tracing::info!(
            words = tokenizer.vocab_size(),
            vocab = %tokenizer.config.vocab_path.display(),
            "vocabulary saved"
        );
        Ok(tokenizer)
    }

    /// Continue from the vocabulary file named in `config` without
    /// rebuilding it from the corpus
    pub fn resume(config: TokenizerConfig) -> Result<Self> {
        let mapping = persist::load_vocabulary(&config.vocab_path)?;
        let mut vocab = Vocabulary::new();
        vocab.load(mapping)?;
        tracing::info!(words = vocab.len(), "vocabulary loaded");
        Ok(Self { vocab, config })
    }

    /// Add every word of `corpus` to the vocabulary in document order
    ///
    /// Nothing is persisted; see [`DynamicTokenizer::save_vocab`].
    pub fn fit(&mut self, corpus: &str) {
        for token in NORMALIZER.normalize(corpus) {
            self.vocab.insert(&token);
        }
    }

    /// Encode text to IDs, minting IDs for unseen words
    ///
    /// When the text contains new words they are appended to the corpus log
    /// as one line and the whole vocabulary file is rewritten.
    ///
    /// # Errors
    /// If the corpus append fails, the words added by this call are removed
    /// again and the error is returned. If the vocabulary rewrite fails the
    /// words stay known; the corpus already records them, so the next
    /// bootstrap recovers the file.
    pub fn encode(&mut self, text: &str) -> Result<Vec<TokenId>> {
        let size_before = self.vocab.len();
        let mut new_words = Vec::new();

        let ids: Vec<TokenId> = NORMALIZER
            .normalize(text)
            .into_iter()
            .map(|token| match self.vocab.token_to_id(&token) {
                Some(id) => TokenId::from(id),
                None => {
                    let id = self.vocab.insert(&token);
                    new_words.push(token);
                    TokenId::from(id)
                }
            })
            .collect();

        if !new_words.is_empty() {
            self.flush(&new_words, size_before)?;
        }
        Ok(ids)
    }

    /// Encode a batch of texts, flushing after each text that adds words
    pub fn encode_batch(&mut self, texts: &[&str]) -> Result<Vec<Vec<TokenId>>> {
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

    /// Write the vocabulary to the configured vocabulary file
    pub fn save_vocab(&self) -> Result<()> {
        persist::save_vocabulary(&self.vocab.serialize(), &self.config.vocab_path)
    }

    /// Get vocabulary size
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    /// Borrow the underlying vocabulary
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    /// File locations this tokenizer persists to
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    fn flush(&mut self, new_words: &[String], size_before: usize) -> Result<()> {
        if let Err(err) = persist::append_corpus(new_words, &self.config.corpus_path) {
            tracing::warn!(error = %err, "corpus append failed, discarding new words");
            self.vocab.truncate(size_before);
            return Err(err);
        }
        self.save_vocab()?;
        tracing::debug!(added = new_words.len(), words = self.vocab.len(), "vocabulary grown");
        Ok(())
    }
}

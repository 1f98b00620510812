//! Word-level tokenizer for wordtok
//!
//! This crate provides:
//! - Text normalization into whitespace-delimited words
//! - A word <-> ID vocabulary with stable, dense IDs
//! - A static tokenizer fitted once from a corpus
//! - A dynamic tokenizer that grows its vocabulary while encoding and
//!   persists every new word immediately
//!
//! # Example
//!
//! ```
//! use wordtok::StaticTokenizer;
//!
//! let mut tokenizer = StaticTokenizer::new();
//! tokenizer.fit("the cat sat");
//!
//! let ids = tokenizer.encode("the dog sat");
//! assert_eq!(ids, vec![0, -1, 2]);
//! assert_eq!(tokenizer.decode(&ids), "the <UNK> sat");
//! ```

pub mod config;
pub mod dynamic_tokenizer;
pub mod error;
pub mod normalize;
pub mod persist;
pub mod static_tokenizer;
pub mod vocab;

pub use config::TokenizerConfig;
pub use dynamic_tokenizer::DynamicTokenizer;
pub use error::{Result, TokenizerError};
pub use normalize::Normalizer;
pub use static_tokenizer::StaticTokenizer;
pub use vocab::Vocabulary;

/// Element of an encoded sequence: a vocabulary ID or [`UNKNOWN_ID`]
pub type TokenId = i64;

/// Emitted by [`StaticTokenizer::encode`] for words missing from the vocabulary
pub const UNKNOWN_ID: TokenId = -1;

/// Emitted by `decode` for IDs missing from the vocabulary
pub const UNKNOWN_TOKEN: &str = "<UNK>";

/// Map each ID back to its word and join with single spaces
pub(crate) fn decode_with(vocab: &Vocabulary, ids: &[TokenId]) -> String {
    ids.iter()
        .map(|&id| {
            u32::try_from(id)
                .ok()
                .and_then(|id| vocab.id_to_token(id))
                .unwrap_or(UNKNOWN_TOKEN)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

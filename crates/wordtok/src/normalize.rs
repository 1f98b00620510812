//! Text normalization: raw text to an ordered sequence of word tokens

/// Normalization policy applied before vocabulary lookup
///
/// Each tokenizer variant is tied to one policy. Vocabularies built with one
/// policy do not round-trip through the other, so the two are never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalizer {
    /// Drop everything except ASCII letters, digits, `_`, `'` and whitespace,
    /// then split on whitespace
    StripPunctuation,
    /// Split on whitespace only; punctuation stays attached to words
    Whitespace,
}

impl Normalizer {
    /// Split `text` into tokens according to this policy
    ///
    /// Empty fragments are dropped, so blank input yields an empty vector.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        match self {
            Self::StripPunctuation => {
                let kept: String = text.chars().filter(|&c| is_word_char(c)).collect();
                split_words(&kept)
            }
            Self::Whitespace => split_words(text),
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '\'' || c.is_whitespace()
}

fn split_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

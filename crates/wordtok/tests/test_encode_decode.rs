//! Unit tests for encoding and decoding with a fitted vocabulary

use wordtok::{StaticTokenizer, UNKNOWN_ID, UNKNOWN_TOKEN};

#[test]
fn test_fit_scenario() {
    let mut tokenizer = StaticTokenizer::new();
    tokenizer.fit("the cat sat");

    let vocab = tokenizer.vocabulary();
    assert_eq!(vocab.token_to_id("the"), Some(0));
    assert_eq!(vocab.token_to_id("cat"), Some(1));
    assert_eq!(vocab.token_to_id("sat"), Some(2));

    let ids = tokenizer.encode("the dog sat");
    assert_eq!(ids, vec![0, UNKNOWN_ID, 2]);
    assert_eq!(tokenizer.decode(&[0, -1, 2]), "the <UNK> sat");
}

#[test]
fn test_decode_basic() {
    let tokenizer = create_test_tokenizer();
    let text = "hello world";

    let ids = tokenizer.encode(text);
    let decoded = tokenizer.decode(&ids);
    assert_eq!(decoded, text);
}

#[test]
fn test_encode_decode_roundtrip() {
    let tokenizer = create_test_tokenizer();
    let texts = vec![
        "hello world",
        "the quick brown fox",
        "rust is awesome",
        "  world   peace  ",
    ];

    for text in texts {
        let ids = tokenizer.encode(text);
        assert!(ids.iter().all(|&id| id != UNKNOWN_ID));
        let decoded = tokenizer.decode(&ids);
        assert_eq!(decoded, text.split_whitespace().collect::<Vec<_>>().join(" "));
    }
}

#[test]
fn test_roundtrip_returns_normalized_form() {
    let tokenizer = create_test_tokenizer();

    let ids = tokenizer.encode("Hello?! world... rust's");
    // "Hello" was never fitted; case is preserved by normalization
    assert_eq!(tokenizer.decode(&ids), "<UNK> world rust's");
}

#[test]
fn test_unknown_words_lose_information() {
    let tokenizer = create_test_tokenizer();

    let ids = tokenizer.encode("hello unicorn");
    assert_eq!(ids[1], UNKNOWN_ID);
    assert_eq!(tokenizer.decode(&ids), format!("hello {UNKNOWN_TOKEN}"));
}

#[test]
fn test_decode_out_of_range_ids() {
    let tokenizer = create_test_tokenizer();
    let size = tokenizer.vocab_size() as i64;

    assert_eq!(tokenizer.decode(&[size, -5, 0]), "<UNK> <UNK> hello");
}

#[test]
fn test_encode_empty_string() {
    let tokenizer = create_test_tokenizer();
    assert!(tokenizer.encode("").is_empty());
    assert!(tokenizer.encode(" \t\n").is_empty());
}

#[test]
fn test_decode_empty_ids() {
    let tokenizer = create_test_tokenizer();
    assert_eq!(tokenizer.decode(&[]), "");
}

#[test]
fn test_encode_multiple_texts() {
    let tokenizer = create_test_tokenizer();
    let texts = vec!["hello", "world", "rust"];

    let all_ids = tokenizer.encode_batch(&texts);
    assert_eq!(all_ids.len(), texts.len());
    assert_eq!(tokenizer.decode_batch(&all_ids), texts);
}

// Helper function to create a test tokenizer
fn create_test_tokenizer() -> StaticTokenizer {
    let corpus = "hello world\n\
                  hello rust\n\
                  world peace\n\
                  rust is awesome\n\
                  rust's the quick brown fox";
    let mut tokenizer = StaticTokenizer::new();
    tokenizer.fit(corpus);
    tokenizer
}

//! Command-line interface for wordtok
//!
//! Both commands rebuild the vocabulary file from the corpus on startup.
//!
//! # Usage
//!
//! ```bash
//! # Fixed vocabulary: unknown words encode to -1
//! wordtok encode "hello world test"
//!
//! # Growing vocabulary: reads one line, new words are added to the corpus
//! wordtok interactive \
//!   [--config wordtok.json] \
//!   [--corpus corpus.txt] \
//!   [--vocab vocab.json]
//! ```

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wordtok::{DynamicTokenizer, StaticTokenizer, TokenizerConfig};

/// Text encoded when no argument is given
const DEFAULT_TEXT: &str = "hello world test";
/// Second text always encoded alongside the first
const DEMO_TEXT: &str = "have fun world";

/// Word-level tokenizer with static and growing vocabularies
#[derive(Parser, Debug)]
#[command(name = "wordtok")]
#[command(about = "Word-level tokenizer with static and growing vocabularies", long_about = None)]
struct Args {
    /// Path to a JSON file with `corpus_path` and `vocab_path`
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Corpus file (overrides the config file)
    #[arg(long, value_name = "PATH", global = true)]
    corpus: Option<PathBuf>,

    /// Vocabulary file (overrides the config file)
    #[arg(long, value_name = "PATH", global = true)]
    vocab: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode and decode text with a vocabulary fitted from the corpus
    Encode {
        /// Text to encode
        #[arg(default_value = DEFAULT_TEXT)]
        text: String,
    },
    /// Read one line, encode it while learning new words, and decode it
    Interactive,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    let config = resolve_config(&args)?;

    match &args.command {
        Command::Encode { text } => run_encode(&config, text),
        Command::Interactive => run_interactive(config),
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn resolve_config(args: &Args) -> Result<TokenizerConfig> {
    let mut config = if let Some(config_path) = &args.config {
        TokenizerConfig::from_file(config_path)
            .with_context(|| format!("Failed to load config file: {}", config_path.display()))?
    } else {
        TokenizerConfig::default()
    };

    if let Some(corpus) = &args.corpus {
        config.corpus_path = corpus.clone();
    }
    if let Some(vocab) = &args.vocab {
        config.vocab_path = vocab.clone();
    }
    Ok(config)
}

fn run_encode(config: &TokenizerConfig, text: &str) -> Result<()> {
    let tokenizer = StaticTokenizer::bootstrap(config).with_context(|| {
        format!(
            "Failed to build vocabulary from {}",
            config.corpus_path.display()
        )
    })?;

    let encoded = tokenizer.encode(text);
    let encoded_demo = tokenizer.encode(DEMO_TEXT);

    println!("Encoded: {:?}", encoded);
    println!("New Encoded String: {:?}", encoded_demo);
    println!("Decoded: {}", tokenizer.decode(&encoded));
    println!("Decoded New String: {}", tokenizer.decode(&encoded_demo));
    Ok(())
}

fn run_interactive(config: TokenizerConfig) -> Result<()> {
    let context = format!(
        "Failed to build vocabulary from {}",
        config.corpus_path.display()
    );
    let mut tokenizer = DynamicTokenizer::bootstrap(config).context(context)?;

    print!("Enter text: ");
    io::stdout().flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read input line")?;

    let encoded = tokenizer
        .encode(line.trim_end_matches(['\r', '\n']))
        .context("Failed to persist new words")?;

    println!("Encoded: {:?}", encoded);
    println!("Decoded: {}", tokenizer.decode(&encoded));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["wordtok", "encode"]).unwrap();
        match args.command {
            Command::Encode { text } => assert_eq!(text, DEFAULT_TEXT),
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(args.verbose, 0);
        assert!(!args.quiet);
    }

    #[test]
    fn test_path_flags_override_defaults() {
        let args = Args::try_parse_from([
            "wordtok",
            "interactive",
            "--corpus",
            "data/c.txt",
            "--vocab",
            "data/v.json",
        ])
        .unwrap();
        let config = resolve_config(&args).unwrap();
        assert_eq!(config, TokenizerConfig::new("data/c.txt", "data/v.json"));
    }

    #[test]
    fn test_interactive_missing_corpus_names_path() {
        let config = TokenizerConfig::new("/nonexistent/corpus.txt", "/nonexistent/vocab.json");
        let err = run_interactive(config).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to build vocabulary from /nonexistent/corpus.txt"
        );
    }

    #[test]
    fn test_missing_config_file_is_reported() {
        let args =
            Args::try_parse_from(["wordtok", "--config", "/nonexistent/wordtok.json", "encode"])
                .unwrap();
        assert!(resolve_config(&args).is_err());
    }
}

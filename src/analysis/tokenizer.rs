//! Tokenizer implementations for text analysis.
//!
//! # Available Tokenizers
//!
//! - [`UnicodeWordTokenizer`] - Unicode word boundaries (UAX #29), used by the
//!   sentiment classifier
//! - [`RegexTokenizer`] - Regex matches, used for word-frequency counting

use std::sync::Arc;

use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::Token;
use crate::error::{ContrailError, Result};

/// Word pattern used for frequency counting: a word character followed by at
/// least one word character or apostrophe.
pub const FREQUENCY_WORD_PATTERN: &str = r"\w[\w']+";

/// Trait for tokenizers that split text into tokens.
///
/// The trait requires `Send + Sync` so a tokenizer can be shared between
/// sessions.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text.
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Splits text on Unicode word boundaries, dropping punctuation and whitespace.
///
/// Contractions such as `don't` stay a single token.
///
/// # Examples
///
/// ```
/// use contrail::analysis::tokenizer::{Tokenizer, UnicodeWordTokenizer};
///
/// let tokens = UnicodeWordTokenizer::new().tokenize("Flight wasn't great, @united!");
/// let words: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
/// assert_eq!(words, ["Flight", "wasn't", "great", "united"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        text.split_word_bound_indices()
            .filter(|(_, word)| word.chars().any(char::is_alphanumeric))
            .enumerate()
            .map(|(position, (start, word))| {
                Token::with_offsets(word, position, start, start + word.len())
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}

/// Extracts regex matches as tokens.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    pattern: Arc<Regex>,
}

impl RegexTokenizer {
    /// Create a tokenizer with [`FREQUENCY_WORD_PATTERN`].
    pub fn new() -> Result<Self> {
        Self::with_pattern(FREQUENCY_WORD_PATTERN)
    }

    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| ContrailError::config(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        self.pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| {
                Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

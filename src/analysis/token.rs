//! Tokens produced by the tokenizers.

use serde::{Deserialize, Serialize};

/// A single unit of text after tokenization.
///
/// # Examples
///
/// ```
/// use contrail::analysis::token::Token;
///
/// let token = Token::with_offsets("delayed", 2, 10, 17);
/// assert_eq!(token.text, "delayed");
/// assert_eq!(token.position, 2);
/// assert_eq!(token.end_offset - token.start_offset, 7);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,
}

impl Token {
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        let text = text.into();
        let end_offset = text.len();
        Token {
            text,
            position,
            start_offset: 0,
            end_offset,
        }
    }

    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }

    /// Lowercased copy of the token text.
    pub fn normalized(&self) -> String {
        self.text.to_lowercase()
    }
}

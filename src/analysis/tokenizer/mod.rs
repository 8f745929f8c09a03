//! Tokenizer implementations for text analysis.
//!
//! Tokenizers split a buffer into [`Token`](crate::analysis::token::Token)s
//! carrying byte offsets into that buffer. Tokens are produced in
//! non-decreasing start order and never overlap.
//!
//! # Available Tokenizers
//!
//! - [`regex::RegexTokenizer`] - Word characters (`\w+`) or a custom pattern
//! - [`unicode_word::UnicodeWordTokenizer`] - Unicode word boundaries
//! - [`unigram::UnigramTokenizer`] - One token per character
//!
//! # Examples
//!
//! ```
//! use irkit::analysis::tokenizer::Tokenizer;
//! use irkit::analysis::tokenizer::regex::RegexTokenizer;
//!
//! let tokenizer = RegexTokenizer::new().unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a tokenizer can be shared by
/// concurrent scans.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod regex;
pub mod unicode_word;
pub mod unigram;

pub use self::regex::RegexTokenizer;
pub use unicode_word::UnicodeWordTokenizer;
pub use unigram::UnigramTokenizer;

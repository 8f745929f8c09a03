//! Character unigram tokenizer.
//!
//! Emits every character of the buffer, whitespace included, as its own
//! token. Scanning with this tokenizer against a trie built from whole words
//! finds dictionary entries as arbitrary substrings, e.g. `needle` inside
//! `haystackneedlehaystack`.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that produces one token per character.
#[derive(Clone, Debug, Default)]
pub struct UnigramTokenizer;

impl UnigramTokenizer {
    /// Create a new unigram tokenizer.
    pub fn new() -> Self {
        UnigramTokenizer
    }
}

impl Tokenizer for UnigramTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = text
            .char_indices()
            .enumerate()
            .map(|(position, (start_offset, c))| {
                Token::with_offsets(c.to_string(), position, start_offset, start_offset + c.len_utf8())
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "unigram"
    }
}

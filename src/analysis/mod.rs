//! Text analysis: tokens, tokenizers, normalizers, and the analyzer that
//! combines them.

pub mod analyzer;
pub mod normalizer;
pub mod token;
pub mod tokenizer;

pub use analyzer::Analyzer;
pub use normalizer::Normalizer;
pub use token::{Token, TokenStream};
pub use tokenizer::Tokenizer;

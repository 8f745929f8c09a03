//! Analyzer that pairs a tokenizer with a normalizer.
//!
//! Dictionaries, indexes and queries must all be processed identically for
//! lookups to succeed. An [`Analyzer`] is the single place that applies the
//! pipeline:
//!
//! 1. Canonicalize the whole buffer
//! 2. Tokenize it
//! 3. Normalize each token, dropping tokens that normalize to nothing
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use irkit::analysis::analyzer::Analyzer;
//! use irkit::analysis::normalizer::LowercaseNormalizer;
//! use irkit::analysis::tokenizer::RegexTokenizer;
//!
//! let analyzer = Analyzer::new(
//!     Arc::new(RegexTokenizer::new().unwrap()),
//!     Arc::new(LowercaseNormalizer::new()),
//! );
//!
//! assert_eq!(analyzer.terms("Hello, World").unwrap(), vec!["hello", "world"]);
//! assert_eq!(analyzer.phrase("Hello,   World").unwrap(), "hello world");
//! ```

use std::fmt;
use std::sync::Arc;

use crate::analysis::normalizer::Normalizer;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer and normalizer used together.
#[derive(Clone)]
pub struct Analyzer {
    tokenizer: Arc<dyn Tokenizer>,
    normalizer: Arc<dyn Normalizer>,
}

impl Analyzer {
    /// Create a new analyzer.
    pub fn new(tokenizer: Arc<dyn Tokenizer>, normalizer: Arc<dyn Normalizer>) -> Self {
        Analyzer {
            tokenizer,
            normalizer,
        }
    }

    /// Get the tokenizer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the normalizer.
    pub fn normalizer(&self) -> &Arc<dyn Normalizer> {
        &self.normalizer
    }

    /// Produce the normalized terms of a buffer, in order.
    pub fn terms(&self, text: &str) -> Result<Vec<String>> {
        let canonical = self.normalizer.canonicalize(text)?;
        let mut terms = Vec::new();
        for token in self.tokenizer.tokenize(&canonical)? {
            let term = self.normalizer.normalize(&token.text)?;
            if !term.is_empty() {
                terms.push(term);
            }
        }
        Ok(terms)
    }

    /// Produce the normalized terms of a buffer joined by single spaces.
    pub fn phrase(&self, text: &str) -> Result<String> {
        Ok(self.terms(text)?.join(" "))
    }
}

impl fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analyzer")
            .field("tokenizer", &self.tokenizer.name())
            .field("normalizer", &self.normalizer.name())
            .finish()
    }
}

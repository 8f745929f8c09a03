//! Case-folding normalizer.
//!
//! Canonicalizes buffers to Unicode NFC, so composed and decomposed
//! spellings of the same word tokenize identically, and lowercases tokens.
//!
//! # Examples
//!
//! ```
//! use irkit::analysis::normalizer::{LowercaseNormalizer, Normalizer};
//!
//! let normalizer = LowercaseNormalizer::new();
//! assert_eq!(normalizer.normalize("ØRRET").unwrap(), "ørret");
//! ```

use unicode_normalization::UnicodeNormalization;

use super::Normalizer;
use crate::error::Result;

/// A normalizer that composes buffers to NFC and lowercases tokens.
#[derive(Clone, Debug, Default)]
pub struct LowercaseNormalizer;

impl LowercaseNormalizer {
    /// Create a new lowercase normalizer.
    pub fn new() -> Self {
        LowercaseNormalizer
    }
}

impl Normalizer for LowercaseNormalizer {
    fn canonicalize(&self, buffer: &str) -> Result<String> {
        Ok(buffer.nfc().collect())
    }

    fn normalize(&self, token: &str) -> Result<String> {
        if token.is_ascii() {
            Ok(token.to_ascii_lowercase())
        } else {
            Ok(token.to_lowercase())
        }
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

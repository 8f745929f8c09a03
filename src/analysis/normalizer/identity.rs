//! A normalizer that leaves text untouched.

use super::Normalizer;
use crate::error::Result;

/// Returns every buffer and token as-is. Useful for exact-match dictionaries.
#[derive(Clone, Debug, Default)]
pub struct IdentityNormalizer;

impl IdentityNormalizer {
    /// Create a new identity normalizer.
    pub fn new() -> Self {
        IdentityNormalizer
    }
}

impl Normalizer for IdentityNormalizer {
    fn canonicalize(&self, buffer: &str) -> Result<String> {
        Ok(buffer.to_string())
    }

    fn normalize(&self, token: &str) -> Result<String> {
        Ok(token.to_string())
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}

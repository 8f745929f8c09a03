//! Normalizers map raw text onto the canonical form that is stored in
//! dictionaries and indexes.
//!
//! A normalizer works at two levels:
//!
//! - [`Normalizer::canonicalize`] is applied to a whole buffer before it is
//!   tokenized (e.g. Unicode composition).
//! - [`Normalizer::normalize`] is applied to one token at a time (e.g. case
//!   folding or a phonetic code).
//!
//! The same normalizer must be used when building a dictionary and when
//! scanning against it.

use crate::error::Result;

/// Trait for token normalizers.
pub trait Normalizer: Send + Sync {
    /// Canonicalize a whole buffer prior to tokenization.
    fn canonicalize(&self, buffer: &str) -> Result<String>;

    /// Normalize a single token.
    fn normalize(&self, token: &str) -> Result<String>;

    /// Get the name of this normalizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod identity;
pub mod lowercase;
pub mod soundex;

pub use identity::IdentityNormalizer;
pub use lowercase::LowercaseNormalizer;
pub use soundex::SoundexNormalizer;

//! Inverted indexes over a corpus.
//!
//! This module provides:
//! - A term dictionary assigning dense term identifiers
//! - An in-memory inverted index with plain or compressed posting lists
//! - A document-frequency-only index
//! - A wrapper logging which postings were read

pub mod access_logged;
pub mod dictionary;
pub mod inverted;

pub use access_logged::AccessLoggedIndex;
pub use dictionary::TermDictionary;
pub use inverted::{FrequencyOnlyIndex, InMemoryInvertedIndex, InvertedIndex, InvertedIndexConfig};

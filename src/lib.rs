//! # irkit
//!
//! Information retrieval building blocks, centered on fast multi-pattern
//! dictionary matching.
//!
//! ## Features
//!
//! - Token-boundary dictionary matching with [`StringFinder`]: every
//!   occurrence of every entry in one left-to-right pass, independent of
//!   dictionary size
//! - Pluggable text analysis (tokenizers and normalizers, including Soundex)
//! - Character tries with per-entry metadata
//! - Damerau-Levenshtein edit tables and approximate trie lookup
//! - In-memory inverted indexes with plain or compressed posting lists
//! - Posting list merging (AND, OR, ANDNOT)
//! - Phrase-prefix search with a suffix array

pub mod analysis;
pub mod document;
pub mod edit_table;
pub mod error;
pub mod finder;
pub mod index;
pub mod postings;
pub mod suffix_array;
pub mod trie;
pub mod util;

pub use error::{IrkitError, Result};
pub use finder::{MatchRecord, Scan, StringFinder};
pub use trie::Trie;

pub mod prelude {
    pub use crate::analysis::{Analyzer, Normalizer, Token, Tokenizer};
    pub use crate::document::{Corpus, Document, InMemoryCorpus};
    pub use crate::edit_table::{EditTable, approximate_matches};
    pub use crate::error::{IrkitError, Result};
    pub use crate::finder::{MatchRecord, StringFinder};
    pub use crate::index::{InMemoryInvertedIndex, InvertedIndex, InvertedIndexConfig};
    pub use crate::postings::{Posting, PostingList, PostingsMerger};
    pub use crate::suffix_array::{SearchOptions, SuffixArray};
    pub use crate::trie::Trie;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

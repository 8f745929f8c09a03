//! Multi-pattern dictionary matching over token streams.
//!
//! [`StringFinder`] finds every entry of a [`Trie`] that occurs in a buffer,
//! in a single left-to-right pass over the buffer's tokens. Matches begin and
//! end on token boundaries, multi-word entries may span several tokens, and
//! overlapping and nested matches are all reported.
//!
//! The walk keeps a small working set of live states, one per partial match
//! still extendable at the current token, plus the root so every token can
//! start a new match. Each token is normalized on its own and every live
//! state tries to advance by it; states that cannot advance, or that reached
//! a leaf, are dropped. The cost is linear in the number of tokens and
//! essentially independent of the dictionary size.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use irkit::analysis::analyzer::Analyzer;
//! use irkit::analysis::normalizer::LowercaseNormalizer;
//! use irkit::analysis::tokenizer::RegexTokenizer;
//! use irkit::finder::StringFinder;
//! use irkit::trie::Trie;
//!
//! let analyzer = Analyzer::new(
//!     Arc::new(RegexTokenizer::new().unwrap()),
//!     Arc::new(LowercaseNormalizer::new()),
//! );
//! let trie: Trie = Trie::from_strings(["a", "a b"], &analyzer).unwrap();
//! let finder = StringFinder::new(Arc::new(trie), analyzer);
//!
//! let surfaces: Vec<String> = finder
//!     .scan("a a b")
//!     .map(|m| m.unwrap().surface)
//!     .collect();
//! assert_eq!(surfaces, vec!["a", "a", "a b"]);
//! ```

pub mod record;
pub mod scan;
pub mod state;

use std::sync::Arc;

use rayon::prelude::*;

use crate::analysis::analyzer::Analyzer;
use crate::error::Result;
use crate::trie::Trie;

pub use record::MatchRecord;
pub use scan::Scan;

/// Finds the dictionary entries of a trie that occur in text buffers.
///
/// The analyzer must use the same tokenizer conventions and normalizer the
/// trie was built with.
#[derive(Clone, Debug)]
pub struct StringFinder<M = ()> {
    trie: Arc<Trie<M>>,
    analyzer: Analyzer,
}

impl<M> StringFinder<M> {
    /// Create a finder over a shared trie.
    pub fn new(trie: Arc<Trie<M>>, analyzer: Analyzer) -> Self {
        StringFinder { trie, analyzer }
    }

    /// The dictionary being matched.
    pub fn trie(&self) -> &Trie<M> {
        &self.trie
    }

    /// The analyzer used to tokenize and normalize scanned buffers.
    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    /// Lazily scan a buffer.
    ///
    /// Matches are produced in the order their last token is reached; among
    /// matches ending on the same token, the one that started earliest comes
    /// first. Nothing is deduplicated.
    pub fn scan<'a>(&'a self, buffer: &'a str) -> Scan<'a, M> {
        Scan::new(&self.trie, &self.analyzer, buffer)
    }

    /// Scan a buffer and collect all of its matches.
    pub fn find_all<'a>(&'a self, buffer: &'a str) -> Result<Vec<MatchRecord<'a, M>>> {
        self.scan(buffer).collect()
    }
}

impl<M: Send + Sync> StringFinder<M> {
    /// Scan several buffers in parallel. Results are in input order.
    pub fn scan_batch<'a>(&'a self, buffers: &[&'a str]) -> Vec<Result<Vec<MatchRecord<'a, M>>>> {
        let finder: &'a Self = self;
        buffers
            .par_iter()
            .map(move |&buffer| finder.find_all(buffer))
            .collect()
    }
}

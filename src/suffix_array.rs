//! Phrase-prefix search with a suffix array.
//!
//! The searchable fields of each document are normalized into one string,
//! and every suffix of that string starting on a token boundary is sorted.
//! A query then matches each suffix it is a prefix of, so `"to the be"`
//! finds `"to the best"` and `"to the behemoth"` alike: the query must start
//! on a token boundary but need not end on one.

use std::cmp::Reverse;
use std::sync::Arc;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::Analyzer;
use crate::document::corpus::Corpus;
use crate::document::document::Document;
use crate::error::Result;

/// Options for [`SuffixArray::evaluate`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Maximum number of hits to return.
    pub hit_count: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions { hit_count: 5 }
    }
}

/// A document matching a query, scored by how often the query occurs in it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SearchHit<'a> {
    pub score: usize,
    pub document: &'a Document,
}

/// A suffix array over the normalized content of a corpus.
pub struct SuffixArray {
    corpus: Arc<dyn Corpus>,
    analyzer: Analyzer,
    /// `(document id, normalized content)` per document.
    haystack: Vec<(u32, String)>,
    /// `(haystack index, byte offset)`, sorted by the suffix they denote.
    suffixes: Vec<(usize, usize)>,
}

impl SuffixArray {
    /// Build a suffix array over the named fields of every document.
    pub fn new(corpus: Arc<dyn Corpus>, fields: &[&str], analyzer: Analyzer) -> Result<Self> {
        let mut haystack = Vec::with_capacity(corpus.size());
        for document in corpus.documents() {
            let content = analyzer.phrase(&document.joined_fields(fields))?;
            haystack.push((document.document_id(), content));
        }

        let mut suffixes: Vec<(usize, usize)> = Vec::new();
        for (index, (_, content)) in haystack.iter().enumerate() {
            let bytes = content.as_bytes();
            suffixes.extend(
                (0..bytes.len())
                    .filter(|&offset| offset == 0 || bytes[offset - 1] == b' ')
                    .map(|offset| (index, offset)),
            );
        }
        suffixes.sort_by(|&(a, i), &(b, j)| haystack[a].1[i..].cmp(&haystack[b].1[j..]));

        log::debug!(
            "built suffix array with {} suffixes over {} documents",
            suffixes.len(),
            haystack.len()
        );

        Ok(SuffixArray {
            corpus,
            analyzer,
            haystack,
            suffixes,
        })
    }

    /// Number of suffixes in the array.
    pub fn len(&self) -> usize {
        self.suffixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    fn suffix(&self, (index, offset): (usize, usize)) -> &str {
        &self.haystack[index].1[offset..]
    }

    /// Find the documents containing the query as a phrase prefix.
    ///
    /// Hits are scored by the number of occurrences, best first; documents
    /// with equal scores come in increasing id order.
    pub fn evaluate(&self, query: &str, options: &SearchOptions) -> Result<Vec<SearchHit<'_>>> {
        let needle = self.analyzer.phrase(query)?;
        if needle.is_empty() {
            return Ok(Vec::new());
        }

        let first = self
            .suffixes
            .partition_point(|&suffix| self.suffix(suffix) < needle.as_str());

        let mut scores: AHashMap<u32, usize> = AHashMap::new();
        for &suffix in self.suffixes[first..]
            .iter()
            .take_while(|&&suffix| self.suffix(suffix).starts_with(needle.as_str()))
        {
            *scores.entry(self.haystack[suffix.0].0).or_insert(0) += 1;
        }

        let mut ranked: Vec<(u32, usize)> = scores.into_iter().collect();
        ranked.sort_by_key(|&(document_id, score)| (Reverse(score), document_id));

        Ok(ranked
            .into_iter()
            .filter_map(|(document_id, score)| {
                self.corpus
                    .get_document(document_id)
                    .map(|document| SearchHit { score, document })
            })
            .take(options.hit_count)
            .collect())
    }
}

impl std::fmt::Debug for SuffixArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuffixArray")
            .field("documents", &self.haystack.len())
            .field("suffixes", &self.suffixes.len())
            .field("analyzer", &self.analyzer)
            .finish()
    }
}

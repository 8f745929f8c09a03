//! In-memory inverted indexes.
//!
//! Indexes are non-positional and not field-aware: the chosen fields of each
//! document are joined and analyzed as one text, and every term gets one
//! posting per document holding its term frequency.

use std::sync::Arc;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::Analyzer;
use crate::document::corpus::Corpus;
use crate::error::Result;
use crate::index::dictionary::TermDictionary;
use crate::postings::posting::{
    CompressedPostingList, InMemoryPostingList, Posting, PostingIterator, PostingList,
};

/// Configuration for [`InMemoryInvertedIndex`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvertedIndexConfig {
    /// Store posting lists varint-compressed instead of as plain vectors.
    pub compressed: bool,
}

/// Read access to an inverted index.
pub trait InvertedIndex: Send + Sync {
    /// Analyze a buffer into the normalized terms the index would store for it.
    /// The terms need not be present in the index.
    fn get_terms(&self, buffer: &str) -> Result<Vec<String>>;

    /// All distinct indexed terms, in no particular order.
    fn get_indexed_terms(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    /// The postings of a term; empty for unknown terms.
    fn get_postings_iterator(&self, term: &str) -> PostingIterator<'_>;

    /// Number of documents containing the term.
    fn get_document_frequency(&self, term: &str) -> usize;

    /// Number of occurrences of the term across all documents.
    fn get_collection_frequency(&self, term: &str) -> u64 {
        self.get_postings_iterator(term)
            .map(|posting| posting.term_frequency as u64)
            .sum()
    }

    /// Whether any document contains the term.
    fn contains(&self, term: &str) -> bool {
        self.get_document_frequency(term) > 0
    }
}

/// Walk the corpus in document id order and report `(term id, document id,
/// term frequency)` for every distinct term of every document.
fn visit_corpus<F>(
    corpus: &dyn Corpus,
    fields: &[&str],
    analyzer: &Analyzer,
    dictionary: &mut TermDictionary,
    mut sink: F,
) -> Result<()>
where
    F: FnMut(u32, u32, u32) -> Result<()>,
{
    let mut documents: Vec<_> = corpus.documents().collect();
    documents.sort_by_key(|document| document.document_id());

    for document in documents {
        let content = document.joined_fields(fields);
        let mut counts: Vec<(u32, u32)> = Vec::new();
        let mut slots: AHashMap<u32, usize> = AHashMap::new();
        for term in analyzer.terms(&content)? {
            let term_id = dictionary.add_if_absent(&term);
            match slots.get(&term_id) {
                Some(&slot) => counts[slot].1 += 1,
                None => {
                    slots.insert(term_id, counts.len());
                    counts.push((term_id, 1));
                }
            }
        }
        for (term_id, term_frequency) in counts {
            sink(term_id, document.document_id(), term_frequency)?;
        }
    }
    Ok(())
}

/// An inverted index with all posting lists held in memory.
#[derive(Debug)]
pub struct InMemoryInvertedIndex {
    analyzer: Analyzer,
    dictionary: TermDictionary,
    posting_lists: Vec<Box<dyn PostingList>>,
}

impl InMemoryInvertedIndex {
    /// Index the named fields of every document in the corpus.
    pub fn new(
        corpus: &dyn Corpus,
        fields: &[&str],
        analyzer: Analyzer,
        config: InvertedIndexConfig,
    ) -> Result<Self> {
        let mut dictionary = TermDictionary::new();
        let mut posting_lists: Vec<Box<dyn PostingList>> = Vec::new();

        visit_corpus(corpus, fields, &analyzer, &mut dictionary, |term_id, document_id, term_frequency| {
            while posting_lists.len() <= term_id as usize {
                if config.compressed {
                    posting_lists.push(Box::new(CompressedPostingList::new()));
                } else {
                    posting_lists.push(Box::new(InMemoryPostingList::new()));
                }
            }
            posting_lists[term_id as usize].append_posting(Posting::new(document_id, term_frequency))
        })?;

        log::debug!(
            "indexed {} documents into {} terms (compressed: {})",
            corpus.size(),
            dictionary.len(),
            config.compressed
        );

        Ok(InMemoryInvertedIndex {
            analyzer,
            dictionary,
            posting_lists,
        })
    }

    /// Convenience constructor taking a shared corpus.
    pub fn from_corpus(
        corpus: Arc<dyn Corpus>,
        fields: &[&str],
        analyzer: Analyzer,
        config: InvertedIndexConfig,
    ) -> Result<Self> {
        Self::new(corpus.as_ref(), fields, analyzer, config)
    }

    fn posting_list(&self, term: &str) -> Option<&dyn PostingList> {
        let term_id = self.dictionary.get_term_id(term)?;
        self.posting_lists.get(term_id as usize).map(|list| list.as_ref())
    }
}

impl InvertedIndex for InMemoryInvertedIndex {
    fn get_terms(&self, buffer: &str) -> Result<Vec<String>> {
        self.analyzer.terms(buffer)
    }

    fn get_indexed_terms(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.dictionary.iter().map(|(term, _)| term))
    }

    fn get_postings_iterator(&self, term: &str) -> PostingIterator<'_> {
        match self.posting_list(term) {
            Some(list) => list.iter(),
            None => Box::new(std::iter::empty()),
        }
    }

    fn get_document_frequency(&self, term: &str) -> usize {
        self.posting_list(term).map_or(0, |list| list.len())
    }
}

/// An index that records only document frequencies, without posting lists.
///
/// Useful when all that is needed is how many documents contain a term.
#[derive(Debug)]
pub struct FrequencyOnlyIndex {
    analyzer: Analyzer,
    dictionary: TermDictionary,
    document_frequencies: Vec<usize>,
}

impl FrequencyOnlyIndex {
    /// Count document frequencies over the named fields of the corpus.
    pub fn new(corpus: &dyn Corpus, fields: &[&str], analyzer: Analyzer) -> Result<Self> {
        let mut dictionary = TermDictionary::new();
        let mut document_frequencies: Vec<usize> = Vec::new();

        visit_corpus(corpus, fields, &analyzer, &mut dictionary, |term_id, _, _| {
            let term_id = term_id as usize;
            if document_frequencies.len() <= term_id {
                document_frequencies.resize(term_id + 1, 0);
            }
            document_frequencies[term_id] += 1;
            Ok(())
        })?;

        log::debug!(
            "counted document frequencies of {} terms over {} documents",
            dictionary.len(),
            corpus.size()
        );

        Ok(FrequencyOnlyIndex {
            analyzer,
            dictionary,
            document_frequencies,
        })
    }
}

impl InvertedIndex for FrequencyOnlyIndex {
    fn get_terms(&self, buffer: &str) -> Result<Vec<String>> {
        self.analyzer.terms(buffer)
    }

    fn get_indexed_terms(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.dictionary.iter().map(|(term, _)| term))
    }

    fn get_postings_iterator(&self, _term: &str) -> PostingIterator<'_> {
        Box::new(std::iter::empty())
    }

    fn get_document_frequency(&self, term: &str) -> usize {
        self.dictionary
            .get_term_id(term)
            .and_then(|id| self.document_frequencies.get(id as usize).copied())
            .unwrap_or(0)
    }
}

//! An index wrapper that records which postings were read.

use parking_lot::Mutex;

use crate::error::Result;
use crate::index::inverted::InvertedIndex;
use crate::postings::posting::PostingIterator;

/// Wraps an index and logs every `(term, document id)` pair handed out by
/// [`InvertedIndex::get_postings_iterator`], in the order they are consumed.
///
/// Lets callers check how much of a posting list a query actually touched.
#[derive(Debug)]
pub struct AccessLoggedIndex<I> {
    inner: I,
    accesses: Mutex<Vec<(String, u32)>>,
}

impl<I: InvertedIndex> AccessLoggedIndex<I> {
    pub fn new(inner: I) -> Self {
        AccessLoggedIndex {
            inner,
            accesses: Mutex::new(Vec::new()),
        }
    }

    /// The wrapped index.
    pub fn inner(&self) -> &I {
        &self.inner
    }

    /// A snapshot of the accesses logged so far.
    pub fn history(&self) -> Vec<(String, u32)> {
        self.accesses.lock().clone()
    }

    /// Forget all logged accesses.
    pub fn clear_history(&self) {
        self.accesses.lock().clear();
    }
}

impl<I: InvertedIndex> InvertedIndex for AccessLoggedIndex<I> {
    fn get_terms(&self, buffer: &str) -> Result<Vec<String>> {
        self.inner.get_terms(buffer)
    }

    fn get_indexed_terms(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        self.inner.get_indexed_terms()
    }

    fn get_postings_iterator(&self, term: &str) -> PostingIterator<'_> {
        let accesses = &self.accesses;
        let term = term.to_string();
        let postings = self.inner.get_postings_iterator(&term);
        Box::new(postings.inspect(move |posting| {
            accesses.lock().push((term.clone(), posting.document_id));
        }))
    }

    fn get_document_frequency(&self, term: &str) -> usize {
        self.inner.get_document_frequency(term)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::analysis::analyzer::Analyzer;
    use crate::analysis::normalizer::LowercaseNormalizer;
    use crate::analysis::tokenizer::RegexTokenizer;
    use crate::document::InMemoryCorpus;
    use crate::index::inverted::{InMemoryInvertedIndex, InvertedIndexConfig};

    fn index() -> AccessLoggedIndex<InMemoryInvertedIndex> {
        let analyzer = Analyzer::new(
            Arc::new(RegexTokenizer::new().unwrap()),
            Arc::new(LowercaseNormalizer::new()),
        );
        let corpus = InMemoryCorpus::from_texts(["eple drue", "drue", "eple", "eple eple"]);
        let index =
            InMemoryInvertedIndex::new(&corpus, &["body"], analyzer, InvertedIndexConfig::default())
                .unwrap();
        AccessLoggedIndex::new(index)
    }

    #[test]
    fn test_logs_only_consumed_postings() {
        let index = index();
        let first_two: Vec<u32> = index
            .get_postings_iterator("eple")
            .take(2)
            .map(|p| p.document_id)
            .collect();

        assert_eq!(first_two, vec![0, 2]);
        assert_eq!(
            index.history(),
            vec![("eple".to_string(), 0), ("eple".to_string(), 2)]
        );
    }

    #[test]
    fn test_unknown_term_logs_nothing() {
        let index = index();
        assert_eq!(index.get_postings_iterator("kiwi").count(), 0);
        assert!(index.history().is_empty());
    }

    #[test]
    fn test_clear_history() {
        let index = index();
        index.get_postings_iterator("drue").for_each(drop);
        assert_eq!(index.history().len(), 2);
        assert_eq!(index.get_document_frequency("drue"), 2);

        index.clear_history();
        assert!(index.history().is_empty());
    }
}

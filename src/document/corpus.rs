//! Document collections.

use ahash::AHashMap;

use crate::document::document::Document;
use crate::error::{IrkitError, Result};

/// A collection of documents addressable by identifier.
pub trait Corpus: Send + Sync {
    /// Number of documents.
    fn size(&self) -> usize;

    /// Look up a document by identifier.
    fn get_document(&self, document_id: u32) -> Option<&Document>;

    /// All documents, in insertion order.
    fn documents(&self) -> Box<dyn Iterator<Item = &Document> + '_>;
}

/// A corpus held entirely in memory.
#[derive(Clone, Debug, Default)]
pub struct InMemoryCorpus {
    documents: Vec<Document>,
    positions: AHashMap<u32, usize>,
}

impl InMemoryCorpus {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a corpus from documents. Identifiers must be unique.
    pub fn from_documents<I: IntoIterator<Item = Document>>(documents: I) -> Result<Self> {
        let mut corpus = Self::new();
        for document in documents {
            corpus.add_document(document)?;
        }
        Ok(corpus)
    }

    /// Build a corpus of single-field documents, numbered from 0, with each
    /// text stored in the `body` field.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut corpus = Self::new();
        for text in texts {
            let document_id = corpus.documents.len() as u32;
            corpus.positions.insert(document_id, corpus.documents.len());
            corpus
                .documents
                .push(Document::builder(document_id).add_text("body", text).build());
        }
        corpus
    }

    /// Add a document.
    pub fn add_document(&mut self, document: Document) -> Result<()> {
        let document_id = document.document_id();
        if self.positions.contains_key(&document_id) {
            return Err(IrkitError::invalid_argument(format!(
                "duplicate document id {document_id}"
            )));
        }
        self.positions.insert(document_id, self.documents.len());
        self.documents.push(document);
        Ok(())
    }
}

impl Corpus for InMemoryCorpus {
    fn size(&self) -> usize {
        self.documents.len()
    }

    fn get_document(&self, document_id: u32) -> Option<&Document> {
        self.positions
            .get(&document_id)
            .and_then(|&position| self.documents.get(position))
    }

    fn documents(&self) -> Box<dyn Iterator<Item = &Document> + '_> {
        Box::new(self.documents.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_texts() {
        let corpus = InMemoryCorpus::from_texts(["eple", "drue"]);

        assert_eq!(corpus.size(), 2);
        assert_eq!(corpus.get_document(1).unwrap().get_field("body"), Some("drue"));
        assert!(corpus.get_document(2).is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = InMemoryCorpus::from_documents(vec![Document::new(4), Document::new(4)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_sparse_ids() {
        let corpus = InMemoryCorpus::from_documents(vec![
            Document::builder(10).add_text("body", "ti").build(),
            Document::builder(3).add_text("body", "tre").build(),
        ])
        .unwrap();

        assert_eq!(corpus.get_document(3).unwrap().get_field("body"), Some("tre"));
        let ids: Vec<u32> = corpus.documents().map(|d| d.document_id()).collect();
        assert_eq!(ids, vec![10, 3]);
    }
}

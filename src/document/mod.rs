//! Documents and corpora.

pub mod corpus;
pub mod document;

pub use corpus::{Corpus, InMemoryCorpus};
pub use document::{Document, DocumentBuilder};

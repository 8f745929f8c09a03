//! Postings and posting lists.
//!
//! A posting list holds, for one term, the documents the term occurs in and
//! how often, sorted by document identifier. Two representations are
//! provided: a plain vector, and a compressed byte buffer storing document id
//! gaps and term frequencies as varints.

use std::io::Cursor;

use serde::{Deserialize, Serialize};

use crate::error::{IrkitError, Result};
use crate::util::varint;

/// A single posting: a document and the number of times the term occurs in it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Posting {
    pub document_id: u32,
    pub term_frequency: u32,
}

impl Posting {
    /// Create a new posting.
    pub fn new(document_id: u32, term_frequency: u32) -> Self {
        Posting {
            document_id,
            term_frequency,
        }
    }
}

/// Iterator over the postings of a list.
pub type PostingIterator<'a> = Box<dyn Iterator<Item = Posting> + Send + 'a>;

/// A posting list sorted by increasing document identifier.
pub trait PostingList: Send + Sync + std::fmt::Debug {
    /// Append a posting. Its document id must exceed every id already present.
    fn append_posting(&mut self, posting: Posting) -> Result<()>;

    /// Number of postings.
    fn len(&self) -> usize;

    /// Whether the list is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the postings in document id order.
    fn iter(&self) -> PostingIterator<'_>;
}

fn check_order(last: Option<u32>, posting: &Posting) -> Result<()> {
    match last {
        Some(last) if posting.document_id <= last => Err(IrkitError::index(format!(
            "posting for document {} appended after document {}",
            posting.document_id, last
        ))),
        _ => Ok(()),
    }
}

/// A posting list backed by a vector.
#[derive(Clone, Debug, Default)]
pub struct InMemoryPostingList {
    postings: Vec<Posting>,
}

impl InMemoryPostingList {
    /// Create an empty posting list.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PostingList for InMemoryPostingList {
    fn append_posting(&mut self, posting: Posting) -> Result<()> {
        check_order(self.postings.last().map(|p| p.document_id), &posting)?;
        self.postings.push(posting);
        Ok(())
    }

    fn len(&self) -> usize {
        self.postings.len()
    }

    fn iter(&self) -> PostingIterator<'_> {
        Box::new(self.postings.iter().copied())
    }
}

/// A posting list stored as varint-encoded `(document id gap, term frequency)` pairs.
#[derive(Clone, Debug, Default)]
pub struct CompressedPostingList {
    bytes: Vec<u8>,
    last_document_id: Option<u32>,
    len: usize,
}

impl CompressedPostingList {
    /// Create an empty compressed posting list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Size of the encoded postings in bytes.
    pub fn size_in_bytes(&self) -> usize {
        self.bytes.len()
    }
}

impl PostingList for CompressedPostingList {
    fn append_posting(&mut self, posting: Posting) -> Result<()> {
        check_order(self.last_document_id, &posting)?;
        let gap = posting.document_id - self.last_document_id.unwrap_or(0);
        varint::write_u32(&mut self.bytes, gap)?;
        varint::write_u32(&mut self.bytes, posting.term_frequency)?;
        self.last_document_id = Some(posting.document_id);
        self.len += 1;
        Ok(())
    }

    fn len(&self) -> usize {
        self.len
    }

    fn iter(&self) -> PostingIterator<'_> {
        let mut cursor = Cursor::new(self.bytes.as_slice());
        let mut document_id = 0u32;
        let mut remaining = self.len;
        Box::new(std::iter::from_fn(move || {
            if remaining == 0 {
                return None;
            }
            remaining -= 1;
            let gap = varint::read_u32(&mut cursor).ok()?;
            let term_frequency = varint::read_u32(&mut cursor).ok()?;
            document_id += gap;
            Some(Posting::new(document_id, term_frequency))
        }))
    }
}

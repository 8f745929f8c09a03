//! Posting lists and the Boolean algebra over them.

pub mod merger;
pub mod posting;

pub use merger::PostingsMerger;
pub use posting::{CompressedPostingList, InMemoryPostingList, Posting, PostingIterator, PostingList};

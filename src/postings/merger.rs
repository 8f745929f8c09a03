//! Boolean merging of posting lists.
//!
//! Each operation takes two posting iterators sorted by increasing document
//! id and lazily yields a posting iterator sorted the same way, so merges
//! compose into larger Boolean expressions. When both operands contain a
//! document, the posting from the left operand is the one yielded.
//!
//! # Examples
//!
//! ```
//! use irkit::postings::{Posting, PostingsMerger};
//!
//! let a = vec![Posting::new(1, 1), Posting::new(3, 1), Posting::new(5, 1)];
//! let b = vec![Posting::new(3, 2), Posting::new(4, 1)];
//!
//! let and: Vec<u32> = PostingsMerger::intersection(a.clone(), b.clone())
//!     .map(|p| p.document_id)
//!     .collect();
//! assert_eq!(and, vec![3]);
//!
//! let or: Vec<u32> = PostingsMerger::union(a.clone(), b.clone())
//!     .map(|p| p.document_id)
//!     .collect();
//! assert_eq!(or, vec![1, 3, 4, 5]);
//!
//! let and_not: Vec<u32> = PostingsMerger::difference(a, b)
//!     .map(|p| p.document_id)
//!     .collect();
//! assert_eq!(and_not, vec![1, 5]);
//! ```

use std::cmp::Ordering;
use std::iter::Peekable;

use crate::postings::posting::Posting;

/// Entry point for the merge operations.
pub struct PostingsMerger;

impl PostingsMerger {
    /// AND(A, B): documents present in both lists.
    pub fn intersection<A, B>(left: A, right: B) -> Intersection<A::IntoIter, B::IntoIter>
    where
        A: IntoIterator<Item = Posting>,
        B: IntoIterator<Item = Posting>,
    {
        Intersection {
            left: left.into_iter(),
            right: right.into_iter(),
        }
    }

    /// OR(A, B): documents present in either list, each once.
    pub fn union<A, B>(left: A, right: B) -> Union<A::IntoIter, B::IntoIter>
    where
        A: IntoIterator<Item = Posting>,
        B: IntoIterator<Item = Posting>,
    {
        Union {
            left: left.into_iter().peekable(),
            right: right.into_iter().peekable(),
        }
    }

    /// ANDNOT(A, B): documents present in the left list but not the right.
    pub fn difference<A, B>(left: A, right: B) -> Difference<A::IntoIter, B::IntoIter>
    where
        A: IntoIterator<Item = Posting>,
        B: IntoIterator<Item = Posting>,
    {
        Difference {
            left: left.into_iter(),
            right: right.into_iter().peekable(),
        }
    }
}

/// Iterator returned by [`PostingsMerger::intersection`].
pub struct Intersection<A, B> {
    left: A,
    right: B,
}

impl<A, B> Iterator for Intersection<A, B>
where
    A: Iterator<Item = Posting>,
    B: Iterator<Item = Posting>,
{
    type Item = Posting;

    fn next(&mut self) -> Option<Posting> {
        let mut a = self.left.next()?;
        let mut b = self.right.next()?;
        loop {
            match a.document_id.cmp(&b.document_id) {
                Ordering::Equal => return Some(a),
                Ordering::Less => a = self.left.next()?,
                Ordering::Greater => b = self.right.next()?,
            }
        }
    }
}

/// Iterator returned by [`PostingsMerger::union`].
pub struct Union<A: Iterator<Item = Posting>, B: Iterator<Item = Posting>> {
    left: Peekable<A>,
    right: Peekable<B>,
}

impl<A, B> Iterator for Union<A, B>
where
    A: Iterator<Item = Posting>,
    B: Iterator<Item = Posting>,
{
    type Item = Posting;

    fn next(&mut self) -> Option<Posting> {
        let order = match (self.left.peek(), self.right.peek()) {
            (None, None) => return None,
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (Some(a), Some(b)) => a.document_id.cmp(&b.document_id),
        };
        match order {
            Ordering::Less => self.left.next(),
            Ordering::Greater => self.right.next(),
            Ordering::Equal => {
                self.right.next();
                self.left.next()
            }
        }
    }
}

/// Iterator returned by [`PostingsMerger::difference`].
pub struct Difference<A, B: Iterator<Item = Posting>> {
    left: A,
    right: Peekable<B>,
}

impl<A, B> Iterator for Difference<A, B>
where
    A: Iterator<Item = Posting>,
    B: Iterator<Item = Posting>,
{
    type Item = Posting;

    fn next(&mut self) -> Option<Posting> {
        'left: loop {
            let a = self.left.next()?;
            while let Some(b) = self.right.peek() {
                match b.document_id.cmp(&a.document_id) {
                    Ordering::Less => {
                        self.right.next();
                    }
                    Ordering::Equal => {
                        self.right.next();
                        continue 'left;
                    }
                    Ordering::Greater => break,
                }
            }
            return Some(a);
        }
    }
}

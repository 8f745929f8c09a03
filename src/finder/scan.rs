//! The lazy scan cursor.
//!
//! A [`Scan`] advances through the buffer's tokens only as far as needed to
//! produce the next match. Within one token, live states are visited oldest
//! first and the root last, so matches completing on the same token come out
//! longest first.

use crate::analysis::analyzer::Analyzer;
use crate::analysis::token::TokenStream;
use crate::error::{IrkitError, Result};
use crate::finder::record::{MatchRecord, collapse_whitespace};
use crate::finder::state::{LiveState, LiveStates, Offset};
use crate::trie::Trie;

/// Converts byte offsets of a buffer into character offsets.
///
/// Tokens arrive in non-decreasing order, so the common case only counts the
/// characters between the previous and the current offset.
struct CharOffsets<'a> {
    buffer: &'a str,
    last: Offset,
}

impl<'a> CharOffsets<'a> {
    fn new(buffer: &'a str) -> Self {
        CharOffsets {
            buffer,
            last: Offset::default(),
        }
    }

    fn locate(&mut self, byte: usize) -> Result<Offset> {
        if byte < self.last.byte {
            self.last = Offset::default();
        }
        let skipped = self.buffer.get(self.last.byte..byte).ok_or_else(|| {
            IrkitError::analysis(format!(
                "token offset {byte} is not a character boundary of a {} byte buffer",
                self.buffer.len()
            ))
        })?;
        self.last = Offset {
            byte,
            char: self.last.char + skipped.chars().count(),
        };
        Ok(self.last)
    }
}

/// The token currently being processed.
struct Step {
    term: String,
    start: Offset,
    end: Offset,
    pending: std::vec::IntoIter<LiveState>,
}

/// Iterator over the dictionary matches in one buffer.
///
/// Yields `Ok(record)` per match. If the tokenizer or normalizer fails, the
/// error is yielded once and the scan ends.
pub struct Scan<'a, M> {
    trie: &'a Trie<M>,
    analyzer: &'a Analyzer,
    buffer: &'a str,
    tokens: Option<TokenStream>,
    started: bool,
    finished: bool,
    offsets: CharOffsets<'a>,
    live: LiveStates,
    step: Option<Step>,
}

impl<'a, M> Scan<'a, M> {
    pub(crate) fn new(trie: &'a Trie<M>, analyzer: &'a Analyzer, buffer: &'a str) -> Self {
        Scan {
            trie,
            analyzer,
            buffer,
            tokens: None,
            started: false,
            finished: false,
            offsets: CharOffsets::new(buffer),
            live: LiveStates::new(),
            step: None,
        }
    }

    /// Number of partial matches currently alive, the root excluded.
    pub fn live_states(&self) -> usize {
        let pending = self.step.as_ref().map_or(0, |step| {
            step.pending.as_slice().iter().filter(|state| !state.is_root()).count()
        });
        self.live.len() + pending
    }

    /// Pull tokens until one yields a non-empty normalized term and set it up
    /// as the current step. Returns `false` once the tokens are exhausted.
    fn begin_step(&mut self) -> Result<bool> {
        if self.tokens.is_none() {
            if self.started || self.buffer.is_empty() {
                return Ok(false);
            }
            self.started = true;
            self.tokens = Some(self.analyzer.tokenizer().tokenize(self.buffer)?);
        }

        while let Some(token) = self.tokens.as_mut().and_then(|tokens| tokens.next()) {
            let term = self.analyzer.normalizer().normalize(&token.text)?;
            if term.is_empty() {
                continue;
            }
            if token.end_offset < token.start_offset {
                return Err(IrkitError::analysis(format!(
                    "token {:?} ends at {} before it starts at {}",
                    token.text, token.end_offset, token.start_offset
                )));
            }

            let start = self.offsets.locate(token.start_offset)?;
            let end = self.offsets.locate(token.end_offset)?;
            let pending = self.live.begin_step(self.trie.root());
            self.step = Some(Step {
                term,
                start,
                end,
                pending: pending.into_iter(),
            });
            return Ok(true);
        }

        self.tokens = None;
        Ok(false)
    }

    fn advance(&mut self) -> Result<Option<MatchRecord<'a, M>>> {
        let trie = self.trie;
        loop {
            let Some(step) = self.step.as_mut() else {
                if self.begin_step()? {
                    continue;
                }
                return Ok(None);
            };
            let Some(state) = step.pending.next() else {
                self.step = None;
                continue;
            };
            let Some(state) = state.advance(trie, &step.term, step.start) else {
                continue;
            };

            let record = if trie.is_final(state.node) {
                let (start, end) = (state.origin, step.end);
                let text = self.buffer.get(start.byte..end.byte).ok_or_else(|| {
                    IrkitError::analysis(format!("span {}..{} is out of bounds", start.byte, end.byte))
                })?;
                Some(MatchRecord {
                    surface: collapse_whitespace(text),
                    span: (start.char, end.char),
                    byte_span: (start.byte, end.byte),
                    matched: state.consumed.clone(),
                    meta: trie.meta(state.node),
                })
            } else {
                None
            };

            // A state at a leaf can only ever re-report what it just found.
            if trie.has_transitions(state.node) {
                self.live.keep(state);
            }

            if let Some(record) = record {
                log::trace!("matched {:?} at {:?}", record.matched, record.span);
                return Ok(Some(record));
            }
        }
    }
}

impl<'a, M> Iterator for Scan<'a, M> {
    type Item = Result<MatchRecord<'a, M>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.advance() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(error) => {
                self.finished = true;
                self.tokens = None;
                self.step = None;
                self.live.clear();
                Some(Err(error))
            }
        }
    }
}

impl<M> std::iter::FusedIterator for Scan<'_, M> {}

//! Live states: in-progress walks through the trie.

use crate::trie::{NodeId, Trie};

/// A position in the scanned buffer, in bytes and in characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Offset {
    /// Byte offset into the buffer.
    pub byte: usize,
    /// Character offset into the buffer.
    pub char: usize,
}

/// A partial match: where in the trie it is, where in the buffer it began,
/// and the normalized text consumed to get there.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiveState {
    /// Trie node reached so far.
    pub node: NodeId,
    /// Start of the first token consumed.
    pub origin: Offset,
    /// Normalized text consumed, multi-word entries joined by single spaces.
    pub consumed: String,
}

impl LiveState {
    /// A state sitting at the root, not yet anchored anywhere.
    pub fn root(node: NodeId) -> Self {
        LiveState {
            node,
            origin: Offset::default(),
            consumed: String::new(),
        }
    }

    /// Whether this state has consumed nothing yet.
    pub fn is_root(&self) -> bool {
        self.consumed.is_empty()
    }

    /// Advance by one normalized token starting at `start`.
    ///
    /// The direct edge is tried first. Failing that, the token is consumed
    /// behind a single separating space, which is how the trie joins the
    /// tokens of multi-word entries. Returns `None` when neither exists.
    pub fn advance<M>(self, trie: &Trie<M>, term: &str, start: Offset) -> Option<LiveState> {
        let (node, spaced) = match trie.consume(self.node, term) {
            Some(node) => (node, false),
            None => (
                trie.consume(self.node, " ")
                    .and_then(|node| trie.consume(node, term))?,
                true,
            ),
        };

        let (origin, consumed) = if self.is_root() {
            (start, term.to_string())
        } else {
            let mut consumed = self.consumed;
            if spaced {
                consumed.push(' ');
            }
            consumed.push_str(term);
            (self.origin, consumed)
        };

        Some(LiveState {
            node,
            origin,
            consumed,
        })
    }
}

/// The working set carried from one token to the next.
///
/// Only in-flight states are stored, oldest first. The root state is never
/// stored: every step re-adds it at the end, so each token can start a new
/// match and the root is visited after every older state.
#[derive(Debug, Default)]
pub struct LiveStates {
    in_flight: Vec<LiveState>,
}

impl LiveStates {
    /// An empty working set.
    pub fn new() -> Self {
        LiveStates::default()
    }

    /// Hand out the states to advance for the next token, root last.
    pub fn begin_step(&mut self, root: NodeId) -> Vec<LiveState> {
        let mut pending = std::mem::take(&mut self.in_flight);
        pending.push(LiveState::root(root));
        pending
    }

    /// Keep an advanced state alive for the next token.
    pub fn keep(&mut self, state: LiveState) {
        self.in_flight.push(state);
    }

    /// Number of in-flight states, the root excluded.
    pub fn len(&self) -> usize {
        self.in_flight.len()
    }

    /// Whether no state is in flight.
    pub fn is_empty(&self) -> bool {
        self.in_flight.is_empty()
    }

    /// Drop every in-flight state.
    pub fn clear(&mut self) {
        self.in_flight.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trie(keys: &[&str]) -> Trie {
        let mut trie = Trie::new();
        for key in keys {
            trie.insert_normalized(key, None);
        }
        trie
    }

    fn at(byte: usize) -> Offset {
        Offset { byte, char: byte }
    }

    #[test]
    fn test_root_state_is_anchored_when_born() {
        let trie = trie(&["drue", "drue appelsin"]);
        let state = LiveState::root(trie.root())
            .advance(&trie, "drue", at(14))
            .unwrap();

        assert_eq!(state.origin, at(14));
        assert_eq!(state.consumed, "drue");
        assert!(trie.is_final(state.node));
    }

    #[test]
    fn test_spaced_transition_keeps_origin() {
        let trie = trie(&["drue appelsin"]);
        let state = LiveState::root(trie.root())
            .advance(&trie, "drue", at(14))
            .unwrap()
            .advance(&trie, "appelsin", at(21))
            .unwrap();

        assert_eq!(state.origin, at(14));
        assert_eq!(state.consumed, "drue appelsin");
        assert!(trie.is_final(state.node));
    }

    #[test]
    fn test_direct_transition_joins_without_space() {
        let trie = trie(&["needle"]);
        let mut state = LiveState::root(trie.root());
        for (i, c) in ["n", "e", "e", "d", "l", "e"].iter().enumerate() {
            state = state.advance(&trie, c, at(8 + i)).unwrap();
        }

        assert_eq!(state.origin, at(8));
        assert_eq!(state.consumed, "needle");
    }

    #[test]
    fn test_dead_end() {
        let trie = trie(&["a b"]);
        let a = LiveState::root(trie.root()).advance(&trie, "a", at(0)).unwrap();

        assert!(a.clone().advance(&trie, "c", at(2)).is_none());
        assert!(LiveState::root(trie.root()).advance(&trie, "b", at(0)).is_none());
    }

    #[test]
    fn test_begin_step_puts_root_last() {
        let trie = trie(&["a b"]);
        let mut states = LiveStates::new();
        let a = LiveState::root(trie.root()).advance(&trie, "a", at(0)).unwrap();
        states.keep(a.clone());

        let pending = states.begin_step(trie.root());
        assert!(states.is_empty());
        assert_eq!(pending.len(), 2);
        assert_eq!(pending[0], a);
        assert!(pending[1].is_root());
    }

    #[test]
    fn test_clear_drops_in_flight_states() {
        let trie = trie(&["a b"]);
        let mut states = LiveStates::new();
        assert!(states.is_empty());

        states.keep(LiveState::root(trie.root()).advance(&trie, "a", at(0)).unwrap());
        assert_eq!(states.len(), 1);
        assert!(!states.is_empty());

        states.clear();
        assert!(states.is_empty());
        assert_eq!(states.begin_step(trie.root()).len(), 1);
    }
}

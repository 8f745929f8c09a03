//! Character trie over normalized dictionary entries.
//!
//! Entries are analyzed (canonicalized, tokenized, normalized token by
//! token) and the normalized tokens are joined with single spaces before
//! insertion, so a multi-word entry such as `drue appelsin` is reachable from
//! the node for `drue` through an edge labeled `' '`.
//!
//! Nodes live in a flat arena and are addressed by [`NodeId`]. The trie is
//! immutable once built and can be shared by any number of concurrent readers.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use irkit::analysis::analyzer::Analyzer;
//! use irkit::analysis::normalizer::LowercaseNormalizer;
//! use irkit::analysis::tokenizer::RegexTokenizer;
//! use irkit::trie::Trie;
//!
//! let analyzer = Analyzer::new(
//!     Arc::new(RegexTokenizer::new().unwrap()),
//!     Arc::new(LowercaseNormalizer::new()),
//! );
//! let trie: Trie = Trie::from_strings(["Apple Computer", "banan"], &analyzer).unwrap();
//!
//! let apple = trie.consume(trie.root(), "apple").unwrap();
//! assert!(!trie.is_final(apple));
//! assert!(trie.consume(apple, " computer").is_some());
//! assert!(trie.contains("apple computer"));
//! ```

use ahash::AHashMap;

use crate::analysis::analyzer::Analyzer;
use crate::error::Result;

/// Handle to a node inside a [`Trie`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Clone, Debug)]
struct TrieNode<M> {
    children: AHashMap<char, NodeId>,
    is_final: bool,
    meta: Option<M>,
}

impl<M> TrieNode<M> {
    fn new() -> Self {
        TrieNode {
            children: AHashMap::new(),
            is_final: false,
            meta: None,
        }
    }
}

/// A trie of normalized dictionary entries, each optionally carrying metadata.
#[derive(Clone, Debug)]
pub struct Trie<M = ()> {
    nodes: Vec<TrieNode<M>>,
    entries: usize,
}

impl<M> Default for Trie<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Trie<M> {
    const ROOT: NodeId = NodeId(0);

    /// Create an empty trie consisting of the root node only.
    pub fn new() -> Self {
        Trie {
            nodes: vec![TrieNode::new()],
            entries: 0,
        }
    }

    /// Build a trie from entries without metadata.
    pub fn from_strings<I, S>(strings: I, analyzer: &Analyzer) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for string in strings {
            trie.add(string.as_ref(), None, analyzer)?;
        }
        log::debug!(
            "built trie with {} entries and {} nodes",
            trie.len(),
            trie.node_count()
        );
        Ok(trie)
    }

    /// Build a trie from `(entry, meta)` pairs.
    pub fn from_strings_with_meta<I, S>(pairs: I, analyzer: &Analyzer) -> Result<Self>
    where
        I: IntoIterator<Item = (S, M)>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for (string, meta) in pairs {
            trie.add(string.as_ref(), Some(meta), analyzer)?;
        }
        log::debug!(
            "built trie with {} entries and {} nodes",
            trie.len(),
            trie.node_count()
        );
        Ok(trie)
    }

    /// Analyze and insert an entry.
    ///
    /// Returns `false` if the entry normalizes to nothing and was ignored.
    /// Re-adding an existing entry with `Some(meta)` replaces its metadata.
    pub fn add(&mut self, string: &str, meta: Option<M>, analyzer: &Analyzer) -> Result<bool> {
        let phrase = analyzer.phrase(string)?;
        if phrase.is_empty() {
            return Ok(false);
        }
        self.insert_normalized(&phrase, meta);
        Ok(true)
    }

    /// Insert an already-normalized key verbatim.
    pub fn insert_normalized(&mut self, key: &str, meta: Option<M>) {
        let mut current = Self::ROOT.0;
        for c in key.chars() {
            current = match self.nodes[current].children.get(&c) {
                Some(next) => next.0,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(TrieNode::new());
                    self.nodes[current].children.insert(c, NodeId(next));
                    next
                }
            };
        }

        let node = &mut self.nodes[current];
        if !node.is_final {
            node.is_final = true;
            self.entries += 1;
        }
        if meta.is_some() {
            node.meta = meta;
        }
    }

    /// The root node.
    pub fn root(&self) -> NodeId {
        Self::ROOT
    }

    /// Follow the edges labeled by every character of `symbols`, starting at `node`.
    pub fn consume(&self, node: NodeId, symbols: &str) -> Option<NodeId> {
        symbols.chars().try_fold(node, |current, c| {
            self.nodes.get(current.0)?.children.get(&c).copied()
        })
    }

    /// Whether some entry terminates at `node`.
    pub fn is_final(&self, node: NodeId) -> bool {
        self.nodes.get(node.0).is_some_and(|n| n.is_final)
    }

    /// Metadata attached to the entry terminating at `node`, if any.
    pub fn meta(&self, node: NodeId) -> Option<&M> {
        self.nodes.get(node.0)?.meta.as_ref()
    }

    /// Labels of the outgoing edges of `node`.
    pub fn transitions(&self, node: NodeId) -> impl Iterator<Item = char> + '_ {
        self.nodes
            .get(node.0)
            .into_iter()
            .flat_map(|n| n.children.keys().copied())
    }

    /// Outgoing edges of `node` with their target nodes.
    pub fn children(&self, node: NodeId) -> impl Iterator<Item = (char, NodeId)> + '_ {
        self.nodes
            .get(node.0)
            .into_iter()
            .flat_map(|n| n.children.iter().map(|(&c, &child)| (c, child)))
    }

    /// Whether `node` has any outgoing edge.
    pub fn has_transitions(&self, node: NodeId) -> bool {
        self.nodes.get(node.0).is_some_and(|n| !n.children.is_empty())
    }

    /// Whether the normalized key is an entry of this trie.
    pub fn contains(&self, key: &str) -> bool {
        self.consume(Self::ROOT, key)
            .is_some_and(|node| self.is_final(node))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries
    }

    /// Whether the trie has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Number of nodes, the root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// All entries, sorted.
    pub fn strings(&self) -> Vec<String> {
        let mut strings = Vec::with_capacity(self.entries);
        let mut stack = vec![(Self::ROOT, String::new())];
        while let Some((node, prefix)) = stack.pop() {
            let Some(current) = self.nodes.get(node.0) else {
                continue;
            };
            if current.is_final {
                strings.push(prefix.clone());
            }
            for (&c, &child) in &current.children {
                let mut next = prefix.clone();
                next.push(c);
                stack.push((child, next));
            }
        }
        strings.sort();
        strings
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::analysis::normalizer::{LowercaseNormalizer, SoundexNormalizer};
    use crate::analysis::tokenizer::RegexTokenizer;

    fn analyzer() -> Analyzer {
        Analyzer::new(
            Arc::new(RegexTokenizer::new().unwrap()),
            Arc::new(LowercaseNormalizer::new()),
        )
    }

    #[test]
    fn test_from_strings() {
        let trie: Trie = Trie::from_strings(["eple", "Drue", "drue  appelsin", "  "], &analyzer()).unwrap();

        assert_eq!(trie.len(), 3);
        assert!(trie.contains("eple"));
        assert!(trie.contains("drue"));
        assert!(trie.contains("drue appelsin"));
        assert!(!trie.contains("dru"));
        assert!(!trie.contains("Drue"));
        assert_eq!(trie.strings(), vec!["drue", "drue appelsin", "eple"]);
    }

    #[test]
    fn test_consume_and_transitions() {
        let trie: Trie = Trie::from_strings(["a", "a b"], &analyzer()).unwrap();
        let root = trie.root();

        let a = trie.consume(root, "a").unwrap();
        assert!(trie.is_final(a));
        assert!(trie.has_transitions(a));
        assert_eq!(trie.transitions(a).collect::<Vec<_>>(), vec![' ']);

        let children: Vec<(char, NodeId)> = trie.children(a).collect();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].0, ' ');
        assert_eq!(trie.consume(a, " "), Some(children[0].1));

        assert!(trie.consume(a, "b").is_none());
        let ab = trie.consume(a, " b").unwrap();
        assert!(trie.is_final(ab));
        assert!(!trie.has_transitions(ab));

        assert_eq!(trie.consume(root, ""), Some(root));
        assert!(!trie.is_final(root));
    }

    #[test]
    fn test_meta() {
        let analyzer = Analyzer::new(
            Arc::new(RegexTokenizer::new().unwrap()),
            Arc::new(SoundexNormalizer::new()),
        );
        let trie = Trie::from_strings_with_meta(
            [("Benedikt Richardson", "Benedikt Richardson"), ("Smith", "Smith")],
            &analyzer,
        )
        .unwrap();

        let node = trie.consume(trie.root(), "B532 R263").unwrap();
        assert_eq!(trie.meta(node), Some(&"Benedikt Richardson"));
        let node = trie.consume(trie.root(), "S530").unwrap();
        assert_eq!(trie.meta(node), Some(&"Smith"));
        assert_eq!(trie.meta(trie.root()), None);
    }

    #[test]
    fn test_duplicate_entries_counted_once() {
        let mut trie: Trie<u32> = Trie::new();
        let analyzer = analyzer();

        assert!(trie.add("foo", Some(1), &analyzer).unwrap());
        assert!(trie.add("FOO", None, &analyzer).unwrap());
        assert!(!trie.add(" ,. ", Some(3), &analyzer).unwrap());

        assert_eq!(trie.len(), 1);
        let node = trie.consume(trie.root(), "foo").unwrap();
        assert_eq!(trie.meta(node), Some(&1));

        trie.add("foo", Some(2), &analyzer).unwrap();
        assert_eq!(trie.meta(node), Some(&2));
    }

    #[test]
    fn test_empty_trie() {
        let trie: Trie = Trie::new();
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 1);
        assert!(!trie.has_transitions(trie.root()));
        assert!(trie.strings().is_empty());
    }
}

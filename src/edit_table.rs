//! Damerau-Levenshtein edit tables and approximate dictionary lookup.
//!
//! An [`EditTable`] keeps the whole dynamic-programming table between a fixed
//! query and a candidate that can be rewritten one symbol at a time. Column
//! `j` depends only on the columns to its left, so a depth-first walk of a
//! [`Trie`] can write the symbol at depth `j` into column `j` and reuse every
//! column above it for all entries below that node. This is the trie
//! algorithm of Shang and Merrett; [`approximate_matches`] implements it,
//! with Ukkonen's cutoff to skip subtrees that cannot come within range.
//!
//! Edits have unit cost: insertion, deletion, substitution, and transposition
//! of two adjacent symbols.
//!
//! # Examples
//!
//! ```
//! use irkit::edit_table::EditTable;
//!
//! assert_eq!(EditTable::new("kitten", "sitting").distance(), 3);
//! assert_eq!(EditTable::new("abcd", "acbd").distance(), 1);
//! ```

use std::cmp::min;
use std::fmt;

use crate::error::{IrkitError, Result};
use crate::trie::Trie;

/// An edit table between a query and a mutable candidate.
///
/// `table[i][j]` holds the distance between the first `i` query symbols and
/// the first `j` candidate symbols.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditTable {
    query: Vec<char>,
    candidate: Vec<char>,
    table: Vec<Vec<usize>>,
}

impl EditTable {
    /// Build the table for a query and a candidate and compute every column.
    pub fn new(query: &str, candidate: &str) -> Self {
        let mut table = Self::unfilled(query, candidate);
        for j in 1..=table.candidate.len() {
            table.fill_column(j);
        }
        table
    }

    /// Build the table without computing any candidate column.
    ///
    /// Only the first row and column, the distances to the empty string, are
    /// set. Call [`EditTable::update`] on each column from left to right.
    pub fn unfilled(query: &str, candidate: &str) -> Self {
        let query: Vec<char> = query.chars().collect();
        let candidate: Vec<char> = candidate.chars().collect();

        let mut table = vec![vec![0; candidate.len() + 1]; query.len() + 1];
        for (i, row) in table.iter_mut().enumerate() {
            row[0] = i;
        }
        for (j, cell) in table[0].iter_mut().enumerate() {
            *cell = j;
        }

        EditTable {
            query,
            candidate,
            table,
        }
    }

    /// A table with an empty candidate, to be grown with [`EditTable::update_symbol`].
    pub fn for_query(query: &str) -> Self {
        Self::unfilled(query, "")
    }

    /// Number of query symbols.
    pub fn query_len(&self) -> usize {
        self.query.len()
    }

    /// Number of candidate symbols.
    pub fn candidate_len(&self) -> usize {
        self.candidate.len()
    }

    /// Recompute column `j` (1-based) from the columns to its left.
    ///
    /// Returns the smallest value in the column, i.e. the distance between
    /// the first `j` candidate symbols and the closest query prefix.
    pub fn update(&mut self, j: usize) -> Result<usize> {
        self.check_column(j, self.candidate.len())?;
        Ok(self.fill_column(j))
    }

    /// Replace candidate symbol `j` (1-based) and recompute its column.
    ///
    /// A `j` one past the last column appends the symbol and grows the table,
    /// so candidates longer than first anticipated can be handled. Columns
    /// right of `j` are left untouched and are stale until recomputed.
    pub fn update_symbol(&mut self, j: usize, symbol: char) -> Result<usize> {
        self.check_column(j, self.candidate.len() + 1)?;
        if j > self.candidate.len() {
            self.candidate.push(symbol);
            self.table[0].push(j);
            for row in self.table.iter_mut().skip(1) {
                row.push(0);
            }
        } else {
            self.candidate[j - 1] = symbol;
        }
        Ok(self.fill_column(j))
    }

    /// Distance between the query and the whole candidate.
    pub fn distance(&self) -> usize {
        self.table[self.query.len()][self.candidate.len()]
    }

    /// Distance between the query and the first `j` candidate symbols.
    pub fn prefix_distance(&self, j: usize) -> Option<usize> {
        self.table[self.query.len()].get(j).copied()
    }

    /// The first `j` candidate symbols.
    pub fn prefix(&self, j: usize) -> String {
        self.candidate.iter().take(j).collect()
    }

    fn check_column(&self, j: usize, last: usize) -> Result<()> {
        if j == 0 || j > last {
            return Err(IrkitError::invalid_argument(format!(
                "edit table column {j} is outside 1..={last}"
            )));
        }
        Ok(())
    }

    fn fill_column(&mut self, j: usize) -> usize {
        let symbol = self.candidate[j - 1];
        let mut column_min = self.table[0][j];

        for i in 1..=self.query.len() {
            let cost = usize::from(self.query[i - 1] != symbol);
            let mut value = min(
                min(
                    self.table[i][j - 1] + 1, // insertion
                    self.table[i - 1][j] + 1, // deletion
                ),
                self.table[i - 1][j - 1] + cost, // substitution
            );

            if i > 1
                && j > 1
                && self.query[i - 1] == self.candidate[j - 2]
                && self.query[i - 2] == symbol
            {
                value = min(value, self.table[i - 2][j - 2] + 1); // transposition
            }

            self.table[i][j] = value;
            column_min = min(column_min, value);
        }

        column_min
    }
}

impl fmt::Display for EditTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "    ")?;
        for symbol in &self.candidate {
            write!(f, "{symbol:>3}")?;
        }
        for (i, row) in self.table.iter().enumerate() {
            writeln!(f)?;
            let label = if i == 0 { ' ' } else { self.query[i - 1] };
            write!(f, "{label}")?;
            for value in row {
                write!(f, "{value:>3}")?;
            }
        }
        Ok(())
    }
}

/// A dictionary entry within the allowed distance of a query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApproximateMatch<'t, M> {
    /// The normalized entry.
    pub entry: String,
    /// Edit distance between the query and the entry.
    pub distance: usize,
    /// Metadata attached to the entry, if any.
    pub meta: Option<&'t M>,
}

/// Find every trie entry within `max_distance` edits of `query`.
///
/// The query is compared verbatim against the normalized entries, so it
/// should be normalized the same way. Results are ordered by distance, then
/// by entry.
pub fn approximate_matches<'t, M>(
    trie: &'t Trie<M>,
    query: &str,
    max_distance: usize,
) -> Result<Vec<ApproximateMatch<'t, M>>> {
    let mut table = EditTable::for_query(query);
    let mut matches = Vec::new();

    let root = trie.root();
    if trie.is_final(root) && table.query_len() <= max_distance {
        matches.push(ApproximateMatch {
            entry: String::new(),
            distance: table.query_len(),
            meta: trie.meta(root),
        });
    }

    // Depth-first. Every node at depth `j` overwrites column `j`; the
    // columns above it still describe the path to its parent.
    let mut stack: Vec<_> = trie
        .children(root)
        .map(|(symbol, node)| (symbol, node, 1))
        .collect();
    while let Some((symbol, node, depth)) = stack.pop() {
        let column_min = table.update_symbol(depth, symbol)?;
        if column_min > max_distance {
            continue;
        }

        if trie.is_final(node) {
            let distance = table.prefix_distance(depth).unwrap_or(usize::MAX);
            if distance <= max_distance {
                matches.push(ApproximateMatch {
                    entry: table.prefix(depth),
                    distance,
                    meta: trie.meta(node),
                });
            }
        }

        stack.extend(
            trie.children(node)
                .map(|(symbol, child)| (symbol, child, depth + 1)),
        );
    }

    matches.sort_by(|a, b| (a.distance, &a.entry).cmp(&(b.distance, &b.entry)));
    log::debug!(
        "found {} entries within distance {} of {:?}",
        matches.len(),
        max_distance,
        query
    );
    Ok(matches)
}

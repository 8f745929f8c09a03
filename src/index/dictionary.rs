//! Term dictionary mapping terms to dense identifiers.

use ahash::AHashMap;

/// Assigns each distinct term a dense identifier, in order of first sight.
#[derive(Clone, Debug, Default)]
pub struct TermDictionary {
    ids: AHashMap<String, u32>,
    terms: Vec<String>,
}

impl TermDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id of `term`, assigning the next free id if it is new.
    pub fn add_if_absent(&mut self, term: &str) -> u32 {
        if let Some(&id) = self.ids.get(term) {
            return id;
        }
        let id = self.terms.len() as u32;
        self.ids.insert(term.to_string(), id);
        self.terms.push(term.to_string());
        id
    }

    /// Look up the id of a term.
    pub fn get_term_id(&self, term: &str) -> Option<u32> {
        self.ids.get(term).copied()
    }

    /// Look up the term with the given id.
    pub fn get_term(&self, id: u32) -> Option<&str> {
        self.terms.get(id as usize).map(|s| s.as_str())
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the dictionary is empty.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate over `(term, id)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.terms
            .iter()
            .enumerate()
            .map(|(id, term)| (term.as_str(), id as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_if_absent() {
        let mut dictionary = TermDictionary::new();
        assert_eq!(dictionary.add_if_absent("eple"), 0);
        assert_eq!(dictionary.add_if_absent("drue"), 1);
        assert_eq!(dictionary.add_if_absent("eple"), 0);

        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.get_term_id("drue"), Some(1));
        assert_eq!(dictionary.get_term_id("banan"), None);
        assert_eq!(dictionary.get_term(0), Some("eple"));
        assert_eq!(dictionary.get_term(5), None);
    }

    #[test]
    fn test_first_term_has_id_zero() {
        let mut dictionary = TermDictionary::new();
        dictionary.add_if_absent("a");
        // Id 0 is a real id, not an absence marker.
        assert_eq!(dictionary.get_term_id("a"), Some(0));
    }

    #[test]
    fn test_iter() {
        let mut dictionary = TermDictionary::new();
        dictionary.add_if_absent("b");
        dictionary.add_if_absent("a");
        assert_eq!(dictionary.iter().collect::<Vec<_>>(), vec![("b", 0), ("a", 1)]);
    }
}

//! Substring-capable key/value index built on [`Trie`].
//!
//! For each key, every rotation of `key + Terminator` is inserted as a path
//! pointing at the same value:
//! - a rotation that starts right after the terminator spells the key from
//!   position 0, so prefix queries look under `Terminator + query`;
//! - a rotation that ends at the terminator spells a suffix, so suffix
//!   queries look under `query + Terminator`;
//! - any substring is a prefix of some rotation, so infix queries look under
//!   `query` alone.
//!
//! Insertion is O(k²) in the key length; a lookup is O(q + m) for query length
//! q and matched subtree size m.

use crate::config::IndexConfig;
use crate::trie::Trie;
use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// A trie edge label: either a key character or the end-of-key sentinel.
///
/// The sentinel is its own variant, so no key character can be mistaken for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    Terminator,
    Char(char),
}

/// Query shape for [`CyclicIndex::find`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Key starts with the query.
    Prefix,
    /// Key contains the query anywhere.
    #[default]
    Infix,
    /// Key ends with the query.
    Suffix,
}

#[derive(Debug, Clone)]
pub struct CyclicIndex<T> {
    trie: Trie<Symbol, T>,
    config: IndexConfig,
}

impl<T> Default for CyclicIndex<T> {
    fn default() -> Self {
        Self::with_config(IndexConfig::default())
    }
}

impl<T> CyclicIndex<T> {
    /// Creates a case-insensitive index.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: IndexConfig) -> Self {
        Self {
            trie: Trie::new(),
            config,
        }
    }

    pub fn config(&self) -> IndexConfig {
        self.config
    }

    fn chars(&self, s: &str) -> Vec<Symbol> {
        self.config
            .case_matching
            .apply(s)
            .chars()
            .map(Symbol::Char)
            .collect()
    }

    fn terminated(&self, key: &str) -> Vec<Symbol> {
        let mut symbols = self.chars(key);
        symbols.push(Symbol::Terminator);
        symbols
    }

    /// Exact lookup of the full key.
    pub fn get(&self, key: &str) -> Option<&T> {
        self.trie.get(self.terminated(key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of distinct (normalized) keys.
    ///
    /// Each key has exactly one rotation that begins with the terminator.
    pub fn len(&self) -> usize {
        self.trie
            .get_subtree([Symbol::Terminator])
            .map_or(0, Trie::len)
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    pub fn clear(&mut self) {
        self.trie.clear();
    }
}

impl<T: Clone> CyclicIndex<T> {
    /// Indexes `value` under every rotation of `key + Terminator`.
    ///
    /// Re-adding a key replaces its value.
    pub fn add(&mut self, key: &str, value: T) {
        let symbols = self.terminated(key);
        for shift in 0..symbols.len() {
            let rotation = symbols[shift..].iter().chain(&symbols[..shift]).copied();
            self.trie.add(rotation, value.clone());
        }
    }
}

impl<T: Clone + Eq + Hash> CyclicIndex<T> {
    fn collect(&self, path: Vec<Symbol>) -> Vec<T> {
        self.trie
            .get_subtree(path)
            .map(Trie::to_values)
            .unwrap_or_default()
    }

    pub fn find_prefix(&self, query: &str) -> Vec<T> {
        let mut path = vec![Symbol::Terminator];
        path.extend(self.chars(query));
        self.collect(path)
    }

    pub fn find_infix(&self, query: &str) -> Vec<T> {
        self.collect(self.chars(query))
    }

    pub fn find_suffix(&self, query: &str) -> Vec<T> {
        self.collect(self.terminated(query))
    }

    pub fn find(&self, mode: MatchMode, query: &str) -> Vec<T> {
        match mode {
            MatchMode::Prefix => self.find_prefix(query),
            MatchMode::Infix => self.find_infix(query),
            MatchMode::Suffix => self.find_suffix(query),
        }
    }
}

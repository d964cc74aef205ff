//! Recursive prefix tree over sequences of symbols.
//!
//! Each node exclusively owns its children, so the structure is a plain tree
//! with no shared nodes. Every node tracks how many values live in its
//! subtree; re-adding an existing path overwrites the value without touching
//! any count.

use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;

/// A prefix tree mapping symbol sequences `S` to values `T`.
#[derive(Debug, Clone)]
pub struct Trie<S, T> {
    value: Option<T>,
    children: BTreeMap<S, Trie<S, T>>,
    count: usize,
}

impl<S, T> Default for Trie<S, T> {
    fn default() -> Self {
        Self {
            value: None,
            children: BTreeMap::new(),
            count: 0,
        }
    }
}

impl<S: Ord + Copy, T> Trie<S, T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` at the end of `path`, creating nodes as needed.
    ///
    /// Returns 1 if the path held no value before, 0 if an existing value was
    /// overwritten.
    pub fn add<I>(&mut self, path: I, value: T) -> usize
    where
        I: IntoIterator<Item = S>,
    {
        self.add_iter(path.into_iter(), value)
    }

    fn add_iter<I>(&mut self, mut path: I, value: T) -> usize
    where
        I: Iterator<Item = S>,
    {
        let added = match path.next() {
            None => usize::from(self.value.replace(value).is_none()),
            Some(symbol) => self
                .children
                .entry(symbol)
                .or_default()
                .add_iter(path, value),
        };
        self.count += added;
        added
    }

    /// Exact-path lookup.
    pub fn get<I>(&self, path: I) -> Option<&T>
    where
        I: IntoIterator<Item = S>,
    {
        self.get_subtree(path)?.value.as_ref()
    }

    /// Returns the subtree rooted at `path`, or `None` if the path is absent.
    pub fn get_subtree<I>(&self, path: I) -> Option<&Trie<S, T>>
    where
        I: IntoIterator<Item = S>,
    {
        let mut node = self;
        for symbol in path {
            node = node.children.get(&symbol)?;
        }
        Some(node)
    }

    /// The value stored on this node itself.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Number of values stored in this subtree, including this node.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn clear(&mut self) {
        self.value = None;
        self.children.clear();
        self.count = 0;
    }
}

impl<S: Ord + Copy, T: Clone + Eq + Hash> Trie<S, T> {
    /// Collects every value in this subtree in pre-order, keeping only the
    /// first occurrence of equal values.
    pub fn to_values(&self) -> Vec<T> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        self.collect_into(&mut seen, &mut out);
        out
    }

    fn collect_into<'a>(&'a self, seen: &mut HashSet<&'a T>, out: &mut Vec<T>) {
        if let Some(value) = &self.value {
            if seen.insert(value) {
                out.push(value.clone());
            }
        }
        for child in self.children.values() {
            child.collect_into(seen, out);
        }
    }
}

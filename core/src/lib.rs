//! In-memory substring index for typeahead search.
//!
//! - [`Trie`]: a recursive prefix tree storing one value per complete path.
//! - [`CyclicIndex`]: inserts every rotation of `key + terminator` into a
//!   [`Trie`], so prefix, infix and suffix queries are all a single subtree lookup.

pub mod config;
pub mod index;
pub mod trie;

pub use config::{CaseMatching, IndexConfig};
pub use index::{CyclicIndex, MatchMode, Symbol};
pub use trie::Trie;

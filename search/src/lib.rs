//! Incremental typeahead search over records fetched from a remote source.
//!
//! # Design
//!
//! - One [`CyclicIndex`](typeahead_core::CyclicIndex) per engine, keyed by the
//!   source's `key_of` and filled additively from fetch results.
//! - Each normalized query is fetched at most once (`fetched` set).
//! - At most one fetch is in flight. Calls arriving meanwhile overwrite a
//!   single pending slot; only the last one is honored when the fetch resolves.
//! - After every merge, results are recomputed from the index for the latest
//!   requested query, so published results only move forward in freshness.
//!
//! # API
//!
//! - `search()`: normalizes the query, fetches if needed, republishes
//! - `add_value()`: optimistic local insert without touching the source
//! - `results()`: snapshot of the published records and the in-flight flag

mod config;
mod engine;
mod error;
mod query;
mod results;
mod source;

pub use config::{ConfigError, SearchConfig};
pub use engine::SearchEngine;
pub use error::{BoxError, SearchError};
pub use query::SearchQuery;
pub use results::SearchResults;
pub use source::{FnSource, RecordSource};
pub use typeahead_core::{CaseMatching, MatchMode};

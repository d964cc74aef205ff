//! The two collaborator functions an engine is built from.

use crate::error::BoxError;
use std::future::Future;

/// Remote data source feeding a [`SearchEngine`](crate::SearchEngine).
pub trait RecordSource: Send + Sync {
    type Record: Clone + Send;
    type Error: Into<BoxError>;

    /// Returns the records matching an already-normalized query. May be empty.
    fn fetch(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Vec<Self::Record>, Self::Error>> + Send;

    /// Extracts the indexing key of a record. Must be stable for the record's lifetime.
    fn key_of(&self, record: &Self::Record) -> String;
}

/// Adapts a pair of closures to [`RecordSource`].
pub struct FnSource<F, K> {
    fetch: F,
    key_of: K,
}

impl<F, K> FnSource<F, K> {
    pub fn new(fetch: F, key_of: K) -> Self {
        Self { fetch, key_of }
    }
}

impl<F, K, Fut, R, E> RecordSource for FnSource<F, K>
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Vec<R>, E>> + Send,
    K: Fn(&R) -> String + Send + Sync,
    R: Clone + Send,
    E: Into<BoxError>,
{
    type Record = R;
    type Error = E;

    fn fetch(&self, query: &str) -> impl Future<Output = Result<Vec<R>, E>> + Send {
        (self.fetch)(query.to_string())
    }

    fn key_of(&self, record: &R) -> String {
        (self.key_of)(record)
    }
}

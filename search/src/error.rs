use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum SearchError {
    /// The record source failed. The query is the normalized one that was sent.
    #[error("fetch failed for query {query:?}: {source}")]
    Fetch {
        query: String,
        #[source]
        source: BoxError,
    },
}

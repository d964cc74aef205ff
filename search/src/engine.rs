//! Incremental search engine driving a cyclic index from a record source.

use crate::config::SearchConfig;
use crate::error::{BoxError, SearchError};
use crate::query::SearchQuery;
use crate::results::SearchResults;
use crate::source::RecordSource;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use typeahead_core::CyclicIndex;

/// Coordinates fetches from a [`RecordSource`] into one index.
///
/// All state sits behind a single mutex that is never held across a fetch, so
/// `search` may be called concurrently from several tasks. Only one fetch runs
/// at a time; the task that started it also runs any follow-up fetch for the
/// pending query.
pub struct SearchEngine<S: RecordSource> {
    source: S,
    config: SearchConfig,
    notify: Option<Arc<dyn Fn() + Send + Sync>>,
    state: Mutex<State<S::Record>>,
}

struct State<R> {
    /// Maps every indexed key to its normalized form, which keys `records`.
    index: CyclicIndex<String>,
    records: HashMap<String, R>,
    fetched: HashSet<SearchQuery>,
    in_flight: bool,
    /// Single slot: a newer call overwrites an older one.
    pending: Option<SearchQuery>,
    latest: SearchQuery,
    results: Vec<R>,
}

impl<R: Clone> State<R> {
    /// Indexes `record` under `key`. Returns true if the key was not indexed yet.
    fn merge(&mut self, key: &str, record: R) -> bool {
        let id = self.index.config().case_matching.apply(key);
        let is_new = !self.index.contains_key(key);
        if is_new {
            self.index.add(key, id.clone());
        }
        self.records.insert(id, record);
        is_new
    }

    fn publish(&mut self, config: &SearchConfig) {
        let limit = config.result_limit.unwrap_or(usize::MAX);
        let ids = self.index.find(config.match_mode, &self.latest);
        self.results = ids
            .iter()
            .filter_map(|id| self.records.get(id).cloned())
            .take(limit)
            .collect();
    }
}

/// Holds the query being fetched. If a `search` future is dropped mid-fetch,
/// the in-flight flag is cleared and the abandoned query is forgotten.
struct InFlightReset<'a, R> {
    state: &'a Mutex<State<R>>,
    query: Option<SearchQuery>,
}

impl<R> Drop for InFlightReset<'_, R> {
    fn drop(&mut self) {
        if let Some(query) = self.query.take() {
            tracing::debug!(query = %query, "search dropped during fetch");
            let mut state = self.state.lock();
            state.in_flight = false;
            state.pending = None;
            state.fetched.remove(&query);
        }
    }
}

/// Create operations.
impl<S: RecordSource> SearchEngine<S> {
    pub fn new(source: S, config: SearchConfig) -> Self {
        Self::with_records(source, config, Vec::new())
    }

    /// Creates an engine whose index is seeded with `records`.
    ///
    /// Seeding does not mark any query as fetched.
    pub fn with_records(source: S, config: SearchConfig, records: Vec<S::Record>) -> Self {
        let mut state = State {
            index: CyclicIndex::with_config(config.index_config()),
            records: HashMap::new(),
            fetched: HashSet::new(),
            in_flight: false,
            pending: None,
            latest: SearchQuery::new(String::new()),
            results: Vec::new(),
        };
        for record in records {
            let key = source.key_of(&record);
            state.merge(&key, record);
        }

        Self {
            source,
            config,
            notify: None,
            state: Mutex::new(state),
        }
    }

    /// Sets a callback invoked whenever the published results change.
    ///
    /// The callback runs without the engine lock held, so it may read `results()`.
    pub fn with_notify(mut self, notify: Arc<dyn Fn() + Send + Sync>) -> Self {
        self.notify = Some(notify);
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

/// Search operations.
impl<S: RecordSource> SearchEngine<S> {
    /// Runs a query.
    ///
    /// A query that was fetched before republishes from the index without a
    /// fetch. While another fetch is in flight the query only replaces the
    /// pending slot and this call returns at once; its effect is applied when
    /// the in-flight fetch completes.
    ///
    /// A fetch failure is returned to the caller that started the fetch, after
    /// any pending query has been fetched. The first failure wins.
    pub async fn search(&self, query: &str) -> Result<(), SearchError> {
        let query = SearchQuery::normalize(query, self.config.case_matching);

        let current = {
            let mut state = self.state.lock();
            state.latest = query.clone();

            if state.in_flight {
                tracing::trace!(query = %query, "fetch in flight, query left pending");
                state.pending = Some(query);
                return Ok(());
            }

            if state.fetched.contains(&query) {
                tracing::trace!(query = %query, "query already fetched");
                state.publish(&self.config);
                drop(state);
                self.notify();
                return Ok(());
            }

            state.fetched.insert(query.clone());
            state.in_flight = true;
            query
        };

        let mut reset = InFlightReset {
            state: &self.state,
            query: Some(current),
        };
        let mut failure = None;
        while let Some(query) = reset.query.clone() {
            tracing::debug!(query = %query, "fetching records");
            let outcome = self.source.fetch(query.as_str()).await;
            let (next, error) = self.complete(query, outcome);
            reset.query = next;
            if failure.is_none() {
                failure = error;
            }
        }
        failure.map_or(Ok(()), Err)
    }

    /// Merges a fetch outcome and republishes.
    ///
    /// Returns the next query to fetch, if any, and the fetch error. A failed
    /// fetch still hands over to an unfetched pending query.
    fn complete(
        &self,
        query: SearchQuery,
        outcome: Result<Vec<S::Record>, S::Error>,
    ) -> (Option<SearchQuery>, Option<SearchError>) {
        let step = {
            let mut state = self.state.lock();

            let error = match outcome {
                Ok(records) => {
                    let total = records.len();
                    let mut added = 0;
                    for record in records {
                        let key = self.source.key_of(&record);
                        if state.merge(&key, record) {
                            added += 1;
                        }
                    }
                    tracing::debug!(query = %query, total, added, "merged fetched records");
                    None
                }
                Err(err) => {
                    let source: BoxError = err.into();
                    tracing::warn!(query = %query, error = %source, "fetch failed");
                    if self.config.retry_failed_queries {
                        state.fetched.remove(&query);
                    }
                    Some(SearchError::Fetch {
                        query: query.into_inner(),
                        source,
                    })
                }
            };

            state.publish(&self.config);

            let next = match state.pending.take() {
                Some(next) if !state.fetched.contains(&next) => {
                    state.fetched.insert(next.clone());
                    Some(next)
                }
                _ => {
                    state.in_flight = false;
                    None
                }
            };
            (next, error)
        };

        self.notify();
        step
    }

    /// Optimistically indexes a locally created record.
    ///
    /// If its key is not indexed yet, the record is indexed and appended to the
    /// published results unless they are already at `result_limit`. Returns
    /// false and changes nothing otherwise.
    pub fn add_value(&self, record: S::Record) -> bool {
        let key = self.source.key_of(&record);
        {
            let mut state = self.state.lock();
            if state.index.contains_key(&key) {
                return false;
            }
            state.merge(&key, record.clone());
            if self.config.result_limit.is_none_or(|limit| state.results.len() < limit) {
                state.results.push(record);
            }
        }
        self.notify();
        true
    }

    /// Returns a snapshot of the published results.
    pub fn results(&self) -> SearchResults<S::Record> {
        let state = self.state.lock();
        SearchResults {
            records: state.results.clone(),
            is_fetching: state.in_flight,
        }
    }

    pub fn is_fetching(&self) -> bool {
        self.state.lock().in_flight
    }

    /// Number of distinct records in the index.
    pub fn len(&self) -> usize {
        self.state.lock().index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn notify(&self) {
        if let Some(notify) = &self.notify {
            notify();
        }
    }
}

/// Maintenance operations.
impl<S: RecordSource> SearchEngine<S> {
    /// Drops every indexed record, fetched query and published result.
    ///
    /// An in-flight fetch keeps running; its records are merged into the
    /// emptied index when it completes.
    pub fn clear(&self) {
        {
            let mut state = self.state.lock();
            state.index.clear();
            state.records.clear();
            state.fetched.clear();
            state.results.clear();
        }
        self.notify();
    }
}

//! Search results types.

/// Snapshot of the records currently published by a
/// [`SearchEngine`](crate::SearchEngine).
#[derive(Debug, Clone)]
pub struct SearchResults<R> {
    pub(crate) records: Vec<R>,
    pub(crate) is_fetching: bool,
}

impl<R> SearchResults<R> {
    pub fn iter(&self) -> impl Iterator<Item = &R> + '_ {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True while a fetch was in flight when the snapshot was taken.
    pub fn is_fetching(&self) -> bool {
        self.is_fetching
    }

    pub fn into_vec(self) -> Vec<R> {
        self.records
    }
}

impl<R> IntoIterator for SearchResults<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

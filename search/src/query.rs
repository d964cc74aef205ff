//! Search query types.

use nutype::nutype;
use typeahead_core::CaseMatching;

/// A normalized query: trimmed, then case-folded per [`CaseMatching`].
#[nutype(
    sanitize(trim),
    derive(Debug, Clone, PartialEq, Eq, Hash, AsRef, Deref, Display)
)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn normalize(raw: &str, case_matching: CaseMatching) -> Self {
        Self::new(case_matching.apply(raw))
    }
}

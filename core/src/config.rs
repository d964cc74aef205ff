use serde::{Deserialize, Serialize};

/// Case matching behavior for keys and queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMatching {
    /// Keys and queries are compared as given.
    Sensitive,
    /// Keys and queries are lowercased before indexing and lookup.
    #[default]
    Insensitive,
}

impl CaseMatching {
    /// Applies the case transformation to `s`.
    ///
    /// Folds one character at a time, so a substring folds the same way as
    /// the key it came from (`str::to_lowercase` maps a final sigma differently).
    pub fn apply(self, s: &str) -> String {
        match self {
            CaseMatching::Sensitive => s.to_string(),
            CaseMatching::Insensitive => s.chars().flat_map(char::to_lowercase).collect(),
        }
    }
}

/// Construction-time options for a [`CyclicIndex`](crate::CyclicIndex).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    pub case_matching: CaseMatching,
}

impl IndexConfig {
    pub fn case_sensitive() -> Self {
        Self {
            case_matching: CaseMatching::Sensitive,
        }
    }
}

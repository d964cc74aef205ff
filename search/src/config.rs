use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use typeahead_core::{CaseMatching, IndexConfig, MatchMode};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Applied to indexed keys and to queries before fetching.
    pub case_matching: CaseMatching,
    /// How the published results are selected from the index.
    pub match_mode: MatchMode,
    /// Forget a query whose fetch failed so the same query can be fetched again.
    pub retry_failed_queries: bool,
    /// Maximum number of published records. `None` publishes every match.
    pub result_limit: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            case_matching: CaseMatching::default(),
            match_mode: MatchMode::default(),
            retry_failed_queries: true,
            result_limit: None,
        }
    }
}

impl SearchConfig {
    pub fn index_config(&self) -> IndexConfig {
        IndexConfig {
            case_matching: self.case_matching,
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the list of invalid settings. Empty if the config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.result_limit == Some(0) {
            errors.push("result_limit must be at least 1".to_string());
        }

        errors
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::heuristic::HeuristicKind;
use crate::ordering::OrderingKind;
use crate::puzzle::{MAX_SIZE, MIN_SIZE};

pub const DEFAULT_SIZE: usize = 3;
pub const DEFAULT_MAX_ITERATIONS: u32 = 200;
pub const DEFAULT_MAX_RESTARTS: u32 = 1000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io { path: String, source: std::io::Error },
    #[error("invalid config {path}: {source}")]
    Json { path: String, source: serde_json::Error },
    #[error("board size {0} is not supported (expected 2 to 16)")]
    Size(usize),
    #[error("max_iterations must be at least 1")]
    ZeroIterations,
}

/// Everything the search engine is parameterised by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub size: usize,
    /// Pops allowed per run before the start board is replaced.
    pub max_iterations: u32,
    /// Restarts allowed per solve; `None` retries forever.
    pub max_restarts: Option<u32>,
    pub heuristic: HeuristicKind,
    pub ordering: OrderingKind,
    pub verify_solvability: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            max_restarts: Some(DEFAULT_MAX_RESTARTS),
            heuristic: HeuristicKind::default(),
            ordering: OrderingKind::default(),
            verify_solvability: true,
        }
    }
}

impl SearchConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let config: SearchConfig = serde_json::from_str(&raw).map_err(|source| ConfigError::Json {
            path: path.display().to_string(),
            source,
        })?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&self.size) {
            return Err(ConfigError::Size(self.size));
        }
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        Ok(())
    }

    pub fn with_heuristic(mut self, heuristic: HeuristicKind) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_ordering(mut self, ordering: OrderingKind) -> Self {
        self.ordering = ordering;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_max_restarts(mut self, max_restarts: Option<u32>) -> Self {
        self.max_restarts = max_restarts;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: SearchConfig =
            serde_json::from_str(r#"{ "heuristic": "misplaced", "ordering": "greedy" }"#).unwrap();

        assert_eq!(config.heuristic, HeuristicKind::Misplaced);
        assert_eq!(config.ordering, OrderingKind::Greedy);
        assert_eq!(config.size, 3);
        assert_eq!(config.max_iterations, 200);
        assert_eq!(config.max_restarts, Some(1000));
        assert!(config.verify_solvability);
    }

    #[test]
    fn astar_alias_and_unbounded_restarts() {
        let config: SearchConfig =
            serde_json::from_str(r#"{ "ordering": "astar", "max_restarts": null }"#).unwrap();

        assert_eq!(config.ordering, OrderingKind::CostPlusHeuristic);
        assert_eq!(config.max_restarts, None);
    }

    #[test]
    fn rejects_unusable_values() {
        assert!(matches!(
            SearchConfig { size: 1, ..SearchConfig::default() }.validate(),
            Err(ConfigError::Size(1))
        ));
        assert!(matches!(
            SearchConfig::default().with_max_iterations(0).validate(),
            Err(ConfigError::ZeroIterations)
        ));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = SearchConfig::load("/nonexistent/slide-puzzle.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}

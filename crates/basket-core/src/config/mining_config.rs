//! Mining configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_COUNT_CHUNK_ROWS;
use crate::errors::ConfigError;
use crate::types::RuleMetric;

/// Configuration for one mining request.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct MiningConfig {
    /// Minimum support in (0, 1]. Required: there is no compiled default.
    pub min_support: Option<f64>,
    /// Metric used to filter rules. Default: confidence.
    pub metric: Option<RuleMetric>,
    /// Minimum value of `metric` for a rule to be kept.
    /// Default: 1.0 for lift/conviction, 0.0 otherwise.
    pub min_threshold: Option<f64>,
    /// Largest itemset size to mine. Default: unbounded.
    pub max_len: Option<usize>,
    /// Rows per rayon task during support counting. Default: 1024.
    pub count_chunk_rows: Option<usize>,
}

impl MiningConfig {
    /// Returns the configured minimum support, or `MissingValue` if unset.
    pub fn effective_min_support(&self) -> Result<f64, ConfigError> {
        self.min_support.ok_or_else(|| ConfigError::MissingValue {
            field: "mining.min_support".to_string(),
        })
    }

    /// Returns the effective metric, defaulting to confidence.
    pub fn effective_metric(&self) -> RuleMetric {
        self.metric.unwrap_or_default()
    }

    /// Returns the effective threshold, defaulting per metric.
    pub fn effective_min_threshold(&self) -> f64 {
        self.min_threshold
            .unwrap_or_else(|| self.effective_metric().default_threshold())
    }

    /// Returns the effective chunk size, defaulting to 1024 rows.
    pub fn effective_count_chunk_rows(&self) -> usize {
        self.count_chunk_rows.unwrap_or(DEFAULT_COUNT_CHUNK_ROWS)
    }
}

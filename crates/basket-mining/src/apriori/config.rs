//! Miner configuration.

use basket_core::config::MiningConfig;
use basket_core::constants::DEFAULT_COUNT_CHUNK_ROWS;
use basket_core::errors::{ConfigError, MiningError};

/// Validated miner parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct AprioriConfig {
    min_support: f64,
    max_len: Option<usize>,
    count_chunk_rows: usize,
}

impl AprioriConfig {
    /// `min_support` must lie in (0, 1].
    pub fn new(min_support: f64) -> Result<Self, MiningError> {
        if !(min_support > 0.0 && min_support <= 1.0) {
            return Err(MiningError::InvalidThreshold {
                field: "min_support",
                value: min_support,
                reason: "must be in (0, 1]".to_string(),
            });
        }
        Ok(Self {
            min_support,
            max_len: None,
            count_chunk_rows: DEFAULT_COUNT_CHUNK_ROWS,
        })
    }

    /// Stop after itemsets of `max_len` items. Must be at least 1.
    pub fn with_max_len(mut self, max_len: usize) -> Result<Self, MiningError> {
        if max_len == 0 {
            return Err(MiningError::InvalidThreshold {
                field: "max_len",
                value: 0.0,
                reason: "must be at least 1".to_string(),
            });
        }
        self.max_len = Some(max_len);
        Ok(self)
    }

    /// Rows per parallel counting task. Zero is treated as one.
    pub fn with_count_chunk_rows(mut self, rows: usize) -> Self {
        self.count_chunk_rows = rows.max(1);
        self
    }

    /// Build from resolved configuration. `min_support` must be set.
    pub fn from_config(config: &MiningConfig) -> Result<Self, ConfigError> {
        let min_support = config.effective_min_support()?;
        let invalid = |e: MiningError| ConfigError::ValidationFailed {
            field: "mining".to_string(),
            message: e.to_string(),
        };
        let mut out = Self::new(min_support)
            .map_err(invalid)?
            .with_count_chunk_rows(config.effective_count_chunk_rows());
        if let Some(max_len) = config.max_len {
            out = out.with_max_len(max_len).map_err(invalid)?;
        }
        Ok(out)
    }

    pub fn min_support(&self) -> f64 {
        self.min_support
    }

    pub fn max_len(&self) -> Option<usize> {
        self.max_len
    }

    pub fn count_chunk_rows(&self) -> usize {
        self.count_chunk_rows
    }
}

//! Top-level configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::MiningConfig;
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;
use crate::types::RuleMetric;

/// Top-level configuration.
///
/// Resolution order (highest priority first):
/// 1. Explicit overrides (applied via `apply_overrides`)
/// 2. Environment variables (`BASKET_*`)
/// 3. Project config (`basket.toml` in the analysis root)
/// 4. User config (`~/.basket/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct BasketConfig {
    pub mining: MiningConfig,
}

/// Caller-supplied values that beat every other layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub min_support: Option<f64>,
    pub metric: Option<RuleMetric>,
    pub min_threshold: Option<f64>,
    pub max_len: Option<usize>,
}

impl BasketConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                Self::merge_toml_file(&mut config, &user_config_path)?;
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): explicit overrides
        if let Some(o) = overrides {
            Self::apply_overrides(&mut config, o);
        }

        Self::validate(&config)?;
        tracing::debug!(?config, "resolved basket config");
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values that are set.
    pub fn validate(config: &BasketConfig) -> Result<(), ConfigError> {
        let mining = &config.mining;
        if let Some(s) = mining.min_support {
            if !(s > 0.0 && s <= 1.0) {
                return Err(ConfigError::ValidationFailed {
                    field: "mining.min_support".to_string(),
                    message: "must be in (0.0, 1.0]".to_string(),
                });
            }
        }
        if let Some(t) = mining.min_threshold {
            let metric = mining.effective_metric();
            if !metric.accepts_threshold(t) {
                let (lo, hi) = metric.threshold_range();
                return Err(ConfigError::ValidationFailed {
                    field: "mining.min_threshold".to_string(),
                    message: format!("must be in [{}, {}] for metric {}", lo, hi, metric),
                });
            }
        }
        if mining.max_len == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "mining.max_len".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if mining.count_chunk_rows == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "mining.count_chunk_rows".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".basket").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are ignored.
    fn merge_toml_file(config: &mut BasketConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: BasketConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// `other` wins wherever it has a value.
    fn merge(base: &mut BasketConfig, other: &BasketConfig) {
        let (b, o) = (&mut base.mining, &other.mining);
        if o.min_support.is_some() {
            b.min_support = o.min_support;
        }
        if o.metric.is_some() {
            b.metric = o.metric;
        }
        if o.min_threshold.is_some() {
            b.min_threshold = o.min_threshold;
        }
        if o.max_len.is_some() {
            b.max_len = o.max_len;
        }
        if o.count_chunk_rows.is_some() {
            b.count_chunk_rows = o.count_chunk_rows;
        }
    }

    /// Pattern: `BASKET_MIN_SUPPORT`, `BASKET_METRIC`, `BASKET_MIN_THRESHOLD`,
    /// `BASKET_MAX_LEN`. Unparsable values are ignored.
    fn apply_env_overrides(config: &mut BasketConfig) {
        if let Some(v) = env_parse::<f64>("BASKET_MIN_SUPPORT") {
            config.mining.min_support = Some(v);
        }
        if let Some(v) = env_parse::<RuleMetric>("BASKET_METRIC") {
            config.mining.metric = Some(v);
        }
        if let Some(v) = env_parse::<f64>("BASKET_MIN_THRESHOLD") {
            config.mining.min_threshold = Some(v);
        }
        if let Some(v) = env_parse::<usize>("BASKET_MAX_LEN") {
            config.mining.max_len = Some(v);
        }
    }

    /// Apply explicit overrides (highest priority).
    pub fn apply_overrides(config: &mut BasketConfig, o: &ConfigOverrides) {
        if let Some(v) = o.min_support {
            config.mining.min_support = Some(v);
        }
        if let Some(v) = o.metric {
            config.mining.metric = Some(v);
        }
        if let Some(v) = o.min_threshold {
            config.mining.min_threshold = Some(v);
        }
        if let Some(v) = o.max_len {
            config.mining.max_len = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}

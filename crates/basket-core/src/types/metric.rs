//! Interest measures a rule set can be thresholded on.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_LIFT_THRESHOLD};

/// Metric used to filter generated rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleMetric {
    Support,
    #[default]
    Confidence,
    Lift,
    Leverage,
    Conviction,
}

impl RuleMetric {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Support => "support",
            Self::Confidence => "confidence",
            Self::Lift => "lift",
            Self::Leverage => "leverage",
            Self::Conviction => "conviction",
        }
    }

    /// Threshold applied when the caller does not give one.
    pub fn default_threshold(&self) -> f64 {
        match self {
            Self::Lift | Self::Conviction => DEFAULT_LIFT_THRESHOLD,
            Self::Support | Self::Confidence | Self::Leverage => DEFAULT_CONFIDENCE_THRESHOLD,
        }
    }

    /// Inclusive range of meaningful thresholds for this metric.
    pub fn threshold_range(&self) -> (f64, f64) {
        match self {
            Self::Support | Self::Confidence => (0.0, 1.0),
            Self::Lift | Self::Conviction => (0.0, f64::INFINITY),
            Self::Leverage => (-1.0, 1.0),
        }
    }

    /// Whether `value` is a usable threshold for this metric. NaN never is.
    pub fn accepts_threshold(&self, value: f64) -> bool {
        let (lo, hi) = self.threshold_range();
        !value.is_nan() && value >= lo && value <= hi
    }
}

impl fmt::Display for RuleMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RuleMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "support" => Ok(Self::Support),
            "confidence" => Ok(Self::Confidence),
            "lift" => Ok(Self::Lift),
            "leverage" => Ok(Self::Leverage),
            "conviction" => Ok(Self::Conviction),
            other => Err(format!("unknown rule metric: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_metric() {
        assert_eq!(RuleMetric::default(), RuleMetric::Confidence);
        assert_eq!(RuleMetric::Lift.default_threshold(), 1.0);
        assert_eq!(RuleMetric::Confidence.default_threshold(), 0.0);
    }

    #[test]
    fn threshold_ranges() {
        assert!(RuleMetric::Confidence.accepts_threshold(1.0));
        assert!(!RuleMetric::Confidence.accepts_threshold(1.01));
        assert!(RuleMetric::Lift.accepts_threshold(7.5));
        assert!(!RuleMetric::Lift.accepts_threshold(-0.1));
        assert!(RuleMetric::Leverage.accepts_threshold(-0.2));
        assert!(!RuleMetric::Support.accepts_threshold(f64::NAN));
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Lift".parse::<RuleMetric>(), Ok(RuleMetric::Lift));
        assert!("zhang".parse::<RuleMetric>().is_err());
    }
}

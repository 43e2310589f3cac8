//! Frequent-itemset and rule generation errors.

use super::error_code::{self, BasketErrorCode};

/// Errors that can occur while mining itemsets or deriving rules.
#[derive(Debug, thiserror::Error)]
pub enum MiningError {
    #[error("Invalid {field} = {value}: {reason}")]
    InvalidThreshold {
        field: &'static str,
        value: f64,
        reason: String,
    },

    #[error("No support recorded for itemset {itemset}; rule input must be the miner's full output")]
    MissingSupport { itemset: String },

    #[error("Itemset of {size} items exceeds the rule generator limit of {max}")]
    ItemSetTooLarge { size: usize, max: usize },

    #[error("Mining cancelled")]
    Cancelled,
}

impl BasketErrorCode for MiningError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidThreshold { .. } => error_code::INVALID_THRESHOLD,
            Self::MissingSupport { .. } => error_code::MISSING_SUPPORT,
            Self::ItemSetTooLarge { .. } => error_code::ITEMSET_TOO_LARGE,
            Self::Cancelled => error_code::CANCELLED,
        }
    }
}

//! Transaction encoding errors.

use super::error_code::{self, BasketErrorCode};

/// Errors that can occur while building the incidence matrix.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("Dataset contains no transactions")]
    EmptyDataset,

    #[error("Transaction {transaction} has an empty item label")]
    EmptyItemLabel { transaction: String },
}

impl BasketErrorCode for EncodeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyDataset => error_code::EMPTY_DATASET,
            Self::EmptyItemLabel { .. } => error_code::EMPTY_ITEM_LABEL,
        }
    }
}

//! BasketErrorCode trait for collaborator-facing error codes.

/// Stable, machine-readable codes for every error enum.
/// Presentation layers match on the code rather than on the message text.
pub trait BasketErrorCode {
    /// Returns the error code string (e.g., "EMPTY_DATASET").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const EMPTY_DATASET: &str = "EMPTY_DATASET";
pub const EMPTY_ITEM_LABEL: &str = "EMPTY_ITEM_LABEL";
pub const INVALID_THRESHOLD: &str = "INVALID_THRESHOLD";
pub const MISSING_SUPPORT: &str = "MISSING_SUPPORT";
pub const ITEMSET_TOO_LARGE: &str = "ITEMSET_TOO_LARGE";
pub const CANCELLED: &str = "CANCELLED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";

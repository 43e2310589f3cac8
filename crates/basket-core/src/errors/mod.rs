//! Error handling for the basket engine.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod encode_error;
pub mod error_code;
pub mod mining_error;
pub mod pipeline_error;

pub use config_error::ConfigError;
pub use encode_error::EncodeError;
pub use error_code::BasketErrorCode;
pub use mining_error::MiningError;
pub use pipeline_error::PipelineError;

//! # basket-core
//!
//! Shared foundation for the basket mining engine: error enums, layered
//! configuration, tracing setup, mining event hooks, cooperative
//! cancellation, and the collection/identifier types every other crate uses.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod traits;
pub mod types;

//! Observability for the basket engine.
//! `tracing` crate with `EnvFilter`, per-module log levels via `BASKET_LOG`.

pub mod setup;

pub use setup::init_tracing;

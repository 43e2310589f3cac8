//! # basket-bench
//!
//! Benchmarks for the basket mining engine.
//!
//! The library half holds deterministic bakery basket generators shared by
//! the criterion benches in `benches/` and the fixture tests. Run with
//! `cargo bench -p basket-bench`.

pub mod fixtures;

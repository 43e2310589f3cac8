//! Configuration system for the basket engine.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod basket_config;
pub mod mining_config;

pub use basket_config::{BasketConfig, ConfigOverrides};
pub use mining_config::MiningConfig;

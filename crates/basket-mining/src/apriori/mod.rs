//! Apriori frequent-itemset mining.
//!
//! Level-wise: count singletons, then repeatedly join level k into
//! (k+1)-candidates, prune by the subset property, and count survivors with
//! a parallel scan of the incidence matrix.

pub mod candidates;
pub mod config;
pub mod counting;
pub mod diagnostics;
pub mod miner;

pub use config::AprioriConfig;
pub use diagnostics::{LevelStats, MiningDiagnostics};
pub use miner::{mine, AprioriMiner, MiningOutcome};

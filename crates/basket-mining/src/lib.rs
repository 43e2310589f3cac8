//! # basket-mining
//!
//! Market-basket mining engine.
//!
//! Dependency chain: Encoding → Apriori → Rules → Query, tied together by
//! [`pipeline::BasketAnalysis`].

pub mod apriori;
pub mod encoding;
pub mod itemsets;
pub mod pipeline;
pub mod query;
pub mod rules;

pub use apriori::{mine, AprioriConfig, AprioriMiner, MiningDiagnostics, MiningOutcome};
pub use encoding::{encode, encode_baskets, IncidenceMatrix};
pub use itemsets::{FrequentItemSet, ItemSet};
pub use pipeline::{AnalysisResult, AnalysisSettings, BasketAnalysis};
pub use query::{find_rules_for, find_rules_for_labels, recommend, RuleIndex};
pub use rules::{generate_rules, AssociationRule, RuleConfig, RuleGenerator, RuleSet, RuleView};

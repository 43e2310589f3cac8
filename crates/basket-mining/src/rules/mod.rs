//! Association rule derivation, scoring, and ordering.

pub mod generator;
pub mod rule;
pub mod ruleset;

pub use generator::{generate_rules, RuleConfig, RuleGenerator};
pub use rule::{AssociationRule, RuleView};
pub use ruleset::RuleSet;

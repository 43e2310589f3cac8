//! Rule lookup by antecedent.
//!
//! Matching is exact set equality on canonical [`ItemSet`]s, never on joined
//! label strings. "No match" is always an empty result.

mod index;

pub use index::RuleIndex;

use basket_core::types::ItemInterner;

use crate::itemsets::ItemSet;
use crate::rules::{AssociationRule, RuleSet};

/// Rules whose antecedent equals `antecedent`, in rule-set order.
pub fn find_rules_for<'a>(rules: &'a RuleSet, antecedent: &ItemSet) -> Vec<&'a AssociationRule> {
    rules
        .iter()
        .filter(|r| r.antecedent() == antecedent)
        .collect()
}

/// The strongest rule for `antecedent`, or `None` when there is no
/// recommendation.
pub fn recommend<'a>(rules: &'a RuleSet, antecedent: &ItemSet) -> Option<&'a AssociationRule> {
    rules.iter().find(|r| r.antecedent() == antecedent)
}

/// [`find_rules_for`] with labels. Unknown labels match nothing.
pub fn find_rules_for_labels<'a, S: AsRef<str>>(
    rules: &'a RuleSet,
    vocabulary: &ItemInterner,
    labels: &[S],
) -> Vec<&'a AssociationRule> {
    match ItemSet::from_labels(vocabulary, labels) {
        Some(antecedent) => find_rules_for(rules, &antecedent),
        None => Vec::new(),
    }
}

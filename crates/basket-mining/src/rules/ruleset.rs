//! Ordered, deduplicated rule collection.

use std::cmp::Ordering;

use basket_core::types::ItemInterner;

use super::rule::{AssociationRule, RuleView};

/// Rules sorted by confidence descending, then lift descending, then
/// antecedent and consequent in lexicographic label order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    rules: Vec<AssociationRule>,
}

impl RuleSet {
    /// Sort `rules` into canonical order and drop repeated
    /// (antecedent, consequent) pairs.
    pub fn from_rules(mut rules: Vec<AssociationRule>) -> Self {
        rules.sort_by(rule_order);
        // Equal pairs carry equal metrics, so duplicates end up adjacent.
        rules.dedup_by(|a, b| a.antecedent() == b.antecedent() && a.consequent() == b.consequent());
        Self { rules }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&AssociationRule> {
        self.rules.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AssociationRule> {
        self.rules.iter()
    }

    pub fn as_slice(&self) -> &[AssociationRule] {
        &self.rules
    }

    pub fn into_vec(self) -> Vec<AssociationRule> {
        self.rules
    }

    /// Label-based views in rule order.
    pub fn views(&self, vocabulary: &ItemInterner) -> Vec<RuleView> {
        self.rules.iter().map(|r| r.view(vocabulary)).collect()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a AssociationRule;
    type IntoIter = std::slice::Iter<'a, AssociationRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl IntoIterator for RuleSet {
    type Item = AssociationRule;
    type IntoIter = std::vec::IntoIter<AssociationRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}

fn rule_order(a: &AssociationRule, b: &AssociationRule) -> Ordering {
    b.confidence()
        .total_cmp(&a.confidence())
        .then_with(|| b.lift().total_cmp(&a.lift()))
        .then_with(|| a.antecedent().cmp(b.antecedent()))
        .then_with(|| a.consequent().cmp(b.consequent()))
}

//! Precomputed antecedent index for repeated queries.

use basket_core::types::FxHashMap;

use crate::itemsets::ItemSet;
use crate::rules::{AssociationRule, RuleSet};

/// Antecedent → positions in a [`RuleSet`], each list ascending so results
/// keep rule-set order.
#[derive(Debug)]
pub struct RuleIndex<'a> {
    rules: &'a RuleSet,
    by_antecedent: FxHashMap<&'a ItemSet, Vec<usize>>,
}

impl<'a> RuleIndex<'a> {
    pub fn build(rules: &'a RuleSet) -> Self {
        let mut by_antecedent: FxHashMap<&'a ItemSet, Vec<usize>> = FxHashMap::default();
        for (pos, rule) in rules.iter().enumerate() {
            by_antecedent.entry(rule.antecedent()).or_default().push(pos);
        }
        Self {
            rules,
            by_antecedent,
        }
    }

    /// Same result as [`super::find_rules_for`].
    pub fn lookup(&self, antecedent: &ItemSet) -> Vec<&'a AssociationRule> {
        self.by_antecedent
            .get(antecedent)
            .map(|positions| {
                positions
                    .iter()
                    .filter_map(|&p| self.rules.get(p))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn best(&self, antecedent: &ItemSet) -> Option<&'a AssociationRule> {
        self.by_antecedent
            .get(antecedent)
            .and_then(|positions| positions.first())
            .and_then(|&p| self.rules.get(p))
    }

    /// Distinct antecedents.
    pub fn len(&self) -> usize {
        self.by_antecedent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_antecedent.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itemsets::FrequentItemSet;
    use crate::query::{find_rules_for, recommend};
    use crate::rules::generate_rules;
    use basket_core::types::{ItemId, RuleMetric};

    fn set(ids: &[u32]) -> ItemSet {
        ItemSet::new(ids.iter().map(|&i| ItemId(i))).unwrap()
    }

    #[test]
    fn agrees_with_linear_scan() {
        let frequent = vec![
            FrequentItemSet::new(set(&[0]), 6, 10),
            FrequentItemSet::new(set(&[1]), 5, 10),
            FrequentItemSet::new(set(&[2]), 4, 10),
            FrequentItemSet::new(set(&[0, 1]), 4, 10),
            FrequentItemSet::new(set(&[0, 2]), 3, 10),
            FrequentItemSet::new(set(&[1, 2]), 3, 10),
            FrequentItemSet::new(set(&[0, 1, 2]), 2, 10),
        ];
        let rules = generate_rules(&frequent, RuleMetric::Confidence, 0.0).unwrap();
        let index = RuleIndex::build(&rules);
        // Every non-empty proper subset of {0,1,2} is an antecedent.
        assert_eq!(index.len(), 6);
        for query in [set(&[0]), set(&[1, 2]), set(&[0, 1, 2]), set(&[9])] {
            assert_eq!(index.lookup(&query), find_rules_for(&rules, &query));
            assert_eq!(index.best(&query), recommend(&rules, &query));
        }
    }

    #[test]
    fn empty_rule_set() {
        let rules = RuleSet::default();
        let index = RuleIndex::build(&rules);
        assert!(index.is_empty());
        assert!(index.lookup(&set(&[0])).is_empty());
    }
}

//! A scored association rule and its presentation view.

use serde::{Deserialize, Serialize};

use basket_core::types::{ItemInterner, RuleMetric};

use crate::itemsets::ItemSet;

/// `antecedent → consequent`, disjoint sides whose union is a frequent
/// itemset, with its interest measures.
#[derive(Debug, Clone, PartialEq)]
pub struct AssociationRule {
    antecedent: ItemSet,
    consequent: ItemSet,
    antecedent_support: f64,
    consequent_support: f64,
    support: f64,
    confidence: f64,
    lift: f64,
    leverage: f64,
    conviction: f64,
}

impl AssociationRule {
    /// Score a split from row counts over `transactions` rows.
    ///
    /// `count_ab ≤ count_a` and `count_ab ≤ count_b` hold for miner output,
    /// which keeps confidence in [0, 1]. Counts must be non-zero.
    pub(crate) fn from_counts(
        antecedent: ItemSet,
        consequent: ItemSet,
        count_ab: u64,
        count_a: u64,
        count_b: u64,
        transactions: u64,
    ) -> Self {
        let n = transactions as f64;
        let support = count_ab as f64 / n;
        let antecedent_support = count_a as f64 / n;
        let consequent_support = count_b as f64 / n;
        let confidence = (count_ab as f64 / count_a as f64).min(1.0);
        let lift = confidence / consequent_support;
        let leverage = support - antecedent_support * consequent_support;
        let conviction = if confidence >= 1.0 {
            f64::INFINITY
        } else {
            (1.0 - consequent_support) / (1.0 - confidence)
        };
        Self {
            antecedent,
            consequent,
            antecedent_support,
            consequent_support,
            support,
            confidence,
            lift,
            leverage,
            conviction,
        }
    }

    pub fn antecedent(&self) -> &ItemSet {
        &self.antecedent
    }

    pub fn consequent(&self) -> &ItemSet {
        &self.consequent
    }

    pub fn antecedent_support(&self) -> f64 {
        self.antecedent_support
    }

    pub fn consequent_support(&self) -> f64 {
        self.consequent_support
    }

    /// Support of antecedent ∪ consequent.
    pub fn support(&self) -> f64 {
        self.support
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn lift(&self) -> f64 {
        self.lift
    }

    pub fn leverage(&self) -> f64 {
        self.leverage
    }

    /// `+∞` when confidence is 1.
    pub fn conviction(&self) -> f64 {
        self.conviction
    }

    pub fn metric(&self, metric: RuleMetric) -> f64 {
        match metric {
            RuleMetric::Support => self.support,
            RuleMetric::Confidence => self.confidence,
            RuleMetric::Lift => self.lift,
            RuleMetric::Leverage => self.leverage,
            RuleMetric::Conviction => self.conviction,
        }
    }

    /// Plain, label-based view for presentation layers.
    pub fn view(&self, vocabulary: &ItemInterner) -> RuleView {
        RuleView {
            antecedents: self.antecedent.labels(vocabulary),
            consequents: self.consequent.labels(vocabulary),
            antecedent_support: self.antecedent_support,
            consequent_support: self.consequent_support,
            support: self.support,
            confidence: self.confidence,
            lift: self.lift,
            leverage: self.leverage,
            conviction: self.conviction.is_finite().then_some(self.conviction),
        }
    }
}

/// Serializable rule with item labels. `conviction` is `None` for rules
/// that always hold (infinite conviction).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleView {
    pub antecedents: Vec<String>,
    pub consequents: Vec<String>,
    pub antecedent_support: f64,
    pub consequent_support: f64,
    pub support: f64,
    pub confidence: f64,
    pub lift: f64,
    pub leverage: f64,
    pub conviction: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use basket_core::types::ItemId;

    #[test]
    fn bread_to_milk_scores() {
        let rule = AssociationRule::from_counts(
            ItemSet::single(ItemId(0)),
            ItemSet::single(ItemId(1)),
            2,
            3,
            3,
            4,
        );
        assert_eq!(rule.support(), 0.5);
        assert!((rule.confidence() - 2.0 / 3.0).abs() < 1e-12);
        assert!((rule.lift() - 8.0 / 9.0).abs() < 1e-12);
        assert!((rule.leverage() - (0.5 - 0.5625)).abs() < 1e-12);
        assert!((rule.conviction() - 0.75).abs() < 1e-12);
        assert_eq!(rule.metric(RuleMetric::Lift), rule.lift());
    }

    #[test]
    fn certain_rule_has_infinite_conviction() {
        let rule = AssociationRule::from_counts(
            ItemSet::single(ItemId(0)),
            ItemSet::single(ItemId(1)),
            2,
            2,
            3,
            4,
        );
        assert_eq!(rule.confidence(), 1.0);
        assert!(rule.conviction().is_infinite());

        let vocab = ItemInterner::from_labels(["a", "b"]);
        let view = rule.view(&vocab);
        assert_eq!(view.conviction, None);
        assert_eq!(view.antecedents, vec!["a"]);
        assert_eq!(view.consequents, vec!["b"]);
    }
}

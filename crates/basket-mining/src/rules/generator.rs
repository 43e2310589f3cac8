//! Rule generation from frequent itemsets.

use std::sync::Arc;

use rayon::prelude::*;

use basket_core::config::MiningConfig;
use basket_core::constants::MAX_RULE_ITEMSET_LEN;
use basket_core::errors::MiningError;
use basket_core::events::{EventDispatcher, RulesGeneratedEvent};
use basket_core::traits::Cancellable;
use basket_core::types::{ItemId, ItemVec, RuleMetric};

use super::rule::AssociationRule;
use super::ruleset::RuleSet;
use crate::itemsets::{FrequentItemSet, ItemSet, SupportTable};

/// Itemsets handed to rayon between cancellation checks.
const RULE_BATCH: usize = 4096;

/// Validated rule filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleConfig {
    metric: RuleMetric,
    min_threshold: f64,
}

impl RuleConfig {
    /// `min_threshold` must be in the metric's range (see
    /// [`RuleMetric::threshold_range`]).
    pub fn new(metric: RuleMetric, min_threshold: f64) -> Result<Self, MiningError> {
        if !metric.accepts_threshold(min_threshold) {
            let (lo, hi) = metric.threshold_range();
            return Err(MiningError::InvalidThreshold {
                field: "min_threshold",
                value: min_threshold,
                reason: format!("must be in [{}, {}] for metric {}", lo, hi, metric),
            });
        }
        Ok(Self {
            metric,
            min_threshold,
        })
    }

    /// Use the metric's default threshold (1.0 for lift, 0.0 for confidence).
    pub fn with_default_threshold(metric: RuleMetric) -> Self {
        Self {
            metric,
            min_threshold: metric.default_threshold(),
        }
    }

    pub fn from_config(config: &MiningConfig) -> Result<Self, MiningError> {
        Self::new(config.effective_metric(), config.effective_min_threshold())
    }

    pub fn metric(&self) -> RuleMetric {
        self.metric
    }

    pub fn min_threshold(&self) -> f64 {
        self.min_threshold
    }
}

/// Derives and filters rules from a miner's full output.
pub struct RuleGenerator {
    config: RuleConfig,
    cancel: Option<Arc<dyn Cancellable>>,
    events: EventDispatcher,
}

impl RuleGenerator {
    pub fn new(config: RuleConfig) -> Self {
        Self {
            config,
            cancel: None,
            events: EventDispatcher::new(),
        }
    }

    pub fn with_cancellation(mut self, token: Arc<dyn Cancellable>) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn with_events(mut self, events: EventDispatcher) -> Self {
        self.events = events;
        self
    }

    /// Every split of every itemset of two or more items, kept when its
    /// metric value reaches the threshold.
    ///
    /// `frequent` must be the complete miner output: the supports of both
    /// sides of each split are looked up in it, and a missing one is
    /// `MiningError::MissingSupport`.
    pub fn generate(&self, frequent: &[FrequentItemSet]) -> Result<RuleSet, MiningError> {
        let table = SupportTable::new(frequent);
        let multi: Vec<&FrequentItemSet> = frequent.iter().filter(|f| f.len() >= 2).collect();

        let span = tracing::debug_span!(
            "generate_rules",
            itemsets = multi.len(),
            metric = %self.config.metric,
            min_threshold = self.config.min_threshold
        );
        let _guard = span.enter();

        let mut evaluated = 0usize;
        let mut rules: Vec<AssociationRule> = Vec::new();
        for batch in multi.chunks(RULE_BATCH) {
            if let Some(token) = &self.cancel {
                token.checkpoint()?;
            }
            let derived: Vec<(usize, Vec<AssociationRule>)> = batch
                .par_iter()
                .map(|f| self.derive(f, &table))
                .collect::<Result<_, _>>()?;
            for (seen, kept) in derived {
                evaluated += seen;
                rules.extend(kept);
            }
        }

        let rule_set = RuleSet::from_rules(rules);
        tracing::debug!(evaluated, rules = rule_set.len(), "rules generated");
        self.events.emit_rules_generated(&RulesGeneratedEvent {
            metric: self.config.metric.to_string(),
            min_threshold: self.config.min_threshold,
            evaluated,
            retained: rule_set.len(),
        });
        Ok(rule_set)
    }

    /// All splits of one itemset into a private buffer.
    /// Returns (splits examined, rules kept).
    fn derive(
        &self,
        itemset: &FrequentItemSet,
        table: &SupportTable<'_>,
    ) -> Result<(usize, Vec<AssociationRule>), MiningError> {
        let items = itemset.items().items();
        let n = items.len();
        if n > MAX_RULE_ITEMSET_LEN {
            return Err(MiningError::ItemSetTooLarge {
                size: n,
                max: MAX_RULE_ITEMSET_LEN,
            });
        }

        let full: u64 = (1u64 << n) - 1;
        let mut kept = Vec::new();
        for mask in 1..full {
            let (antecedent, consequent) = split(items, mask);
            let count_a = lookup(table, &antecedent)?;
            let count_b = lookup(table, &consequent)?;
            let rule = AssociationRule::from_counts(
                antecedent,
                consequent,
                itemset.count(),
                count_a,
                count_b,
                itemset.transactions(),
            );
            if rule.metric(self.config.metric) >= self.config.min_threshold {
                kept.push(rule);
            }
        }
        Ok(((full - 1) as usize, kept))
    }
}

/// Bit `i` of `mask` puts `items[i]` in the antecedent, otherwise the
/// consequent. `mask` must be neither 0 nor all ones.
fn split(items: &[ItemId], mask: u64) -> (ItemSet, ItemSet) {
    let mut a: ItemVec = ItemVec::new();
    let mut b: ItemVec = ItemVec::new();
    for (i, &id) in items.iter().enumerate() {
        if mask & (1 << i) != 0 {
            a.push(id);
        } else {
            b.push(id);
        }
    }
    (ItemSet::from_sorted(a), ItemSet::from_sorted(b))
}

fn lookup(table: &SupportTable<'_>, items: &ItemSet) -> Result<u64, MiningError> {
    table
        .get(items)
        .map(FrequentItemSet::count)
        .filter(|&c| c > 0)
        .ok_or_else(|| MiningError::MissingSupport {
            itemset: items.to_string(),
        })
}

/// Derive rules with the given metric filter.
pub fn generate_rules(
    frequent: &[FrequentItemSet],
    metric: RuleMetric,
    min_threshold: f64,
) -> Result<RuleSet, MiningError> {
    let config = RuleConfig::new(metric, min_threshold)?;
    RuleGenerator::new(config).generate(frequent)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids: &[u32]) -> ItemSet {
        ItemSet::new(ids.iter().map(|&i| ItemId(i))).unwrap()
    }

    fn scenario() -> Vec<FrequentItemSet> {
        // 0 = bread, 1 = milk over 4 transactions.
        vec![
            FrequentItemSet::new(set(&[0]), 3, 4),
            FrequentItemSet::new(set(&[1]), 3, 4),
            FrequentItemSet::new(set(&[0, 1]), 2, 4),
        ]
    }

    #[test]
    fn pair_yields_both_directions() {
        let rules = generate_rules(&scenario(), RuleMetric::Confidence, 0.0).unwrap();
        assert_eq!(rules.len(), 2);
        let first = rules.get(0).unwrap();
        assert_eq!(first.antecedent(), &set(&[0]));
        assert_eq!(first.consequent(), &set(&[1]));
        assert!((first.confidence() - 0.5 / 0.75).abs() < 1e-12);
        assert!((first.lift() - (0.5 / 0.75) / 0.75).abs() < 1e-12);
    }

    #[test]
    fn lift_threshold_filters() {
        let rules = generate_rules(&scenario(), RuleMetric::Lift, 1.0).unwrap();
        assert!(rules.is_empty());
    }

    #[test]
    fn triple_yields_six_splits() {
        let mut sets = vec![
            FrequentItemSet::new(set(&[0]), 5, 10),
            FrequentItemSet::new(set(&[1]), 5, 10),
            FrequentItemSet::new(set(&[2]), 5, 10),
            FrequentItemSet::new(set(&[0, 1]), 4, 10),
            FrequentItemSet::new(set(&[0, 2]), 4, 10),
            FrequentItemSet::new(set(&[1, 2]), 4, 10),
        ];
        sets.push(FrequentItemSet::new(set(&[0, 1, 2]), 3, 10));
        let rules = generate_rules(&sets, RuleMetric::Confidence, 0.0).unwrap();
        // 3 pairs × 2 + 6 splits of the triple.
        assert_eq!(rules.len(), 12);
        assert!(rules.iter().all(|r| r.antecedent().is_disjoint(r.consequent())));
    }

    #[test]
    fn filtered_input_is_missing_support() {
        let partial = vec![FrequentItemSet::new(set(&[0, 1]), 2, 4)];
        let err = generate_rules(&partial, RuleMetric::Confidence, 0.0).unwrap_err();
        assert!(matches!(err, MiningError::MissingSupport { .. }));
    }

    #[test]
    fn invalid_threshold_fails_fast() {
        assert!(matches!(
            generate_rules(&scenario(), RuleMetric::Confidence, 1.5),
            Err(MiningError::InvalidThreshold { field: "min_threshold", .. })
        ));
        assert!(RuleConfig::new(RuleMetric::Lift, f64::NAN).is_err());
    }

    #[test]
    fn singletons_only_yield_no_rules() {
        let rules = generate_rules(&scenario()[..2], RuleMetric::Confidence, 0.0).unwrap();
        assert!(rules.is_empty());
    }

    #[test]
    fn default_thresholds() {
        assert_eq!(RuleConfig::with_default_threshold(RuleMetric::Lift).min_threshold(), 1.0);
        assert_eq!(RuleConfig::with_default_threshold(RuleMetric::Confidence).min_threshold(), 0.0);
    }

    #[test]
    fn split_partitions_items() {
        let items = [ItemId(1), ItemId(4), ItemId(9)];
        let (a, b) = split(&items, 0b101);
        assert_eq!(a, set(&[1, 9]));
        assert_eq!(b, set(&[4]));
    }
}

//! Frequent itemsets and support lookup.

use serde::{Deserialize, Serialize};

use basket_core::types::FxHashMap;

use super::itemset::ItemSet;

/// An itemset that met the support threshold, with the row count it was
/// measured on.
///
/// Deserializing recomputes `support` from `count` and `transactions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredFrequentItemSet")]
pub struct FrequentItemSet {
    items: ItemSet,
    count: u64,
    transactions: u64,
    support: f64,
}

#[derive(Deserialize)]
struct StoredFrequentItemSet {
    items: ItemSet,
    count: u64,
    transactions: u64,
}

impl From<StoredFrequentItemSet> for FrequentItemSet {
    fn from(stored: StoredFrequentItemSet) -> Self {
        Self::new(stored.items, stored.count, stored.transactions)
    }
}

impl FrequentItemSet {
    /// `count` rows out of `transactions` contain `items`.
    ///
    /// `count` is clamped to `transactions`, so support stays in [0, 1].
    pub fn new(items: ItemSet, count: u64, transactions: u64) -> Self {
        let count = count.min(transactions);
        let support = if transactions == 0 {
            0.0
        } else {
            count as f64 / transactions as f64
        };
        Self {
            items,
            count,
            transactions,
            support,
        }
    }

    pub fn items(&self) -> &ItemSet {
        &self.items
    }

    /// Rows containing every item.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Rows in the matrix the support was measured on.
    pub fn transactions(&self) -> u64 {
        self.transactions
    }

    /// Fraction of transactions containing every item.
    pub fn support(&self) -> f64 {
        self.support
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Itemset → frequent-itemset lookup over one miner output.
#[derive(Debug)]
pub struct SupportTable<'a> {
    by_items: FxHashMap<&'a ItemSet, &'a FrequentItemSet>,
}

impl<'a> SupportTable<'a> {
    pub fn new(itemsets: &'a [FrequentItemSet]) -> Self {
        let mut by_items = FxHashMap::default();
        by_items.reserve(itemsets.len());
        for f in itemsets {
            by_items.insert(&f.items, f);
        }
        Self { by_items }
    }

    pub fn get(&self, items: &ItemSet) -> Option<&'a FrequentItemSet> {
        self.by_items.get(items).copied()
    }

    pub fn len(&self) -> usize {
        self.by_items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use basket_core::types::ItemId;

    #[test]
    fn support_is_count_over_transactions() {
        let f = FrequentItemSet::new(ItemSet::single(ItemId(0)), 3, 4);
        assert_eq!(f.support(), 0.75);
        assert_eq!(f.count(), 3);
    }

    #[test]
    fn support_never_exceeds_one() {
        let f = FrequentItemSet::new(ItemSet::single(ItemId(0)), 9, 4);
        assert_eq!(f.support(), 1.0);
        let empty = FrequentItemSet::new(ItemSet::single(ItemId(0)), 0, 0);
        assert_eq!(empty.support(), 0.0);
    }

    #[test]
    fn table_lookup() {
        let sets = vec![
            FrequentItemSet::new(ItemSet::single(ItemId(0)), 3, 4),
            FrequentItemSet::new(ItemSet::new([ItemId(1), ItemId(0)]).unwrap(), 2, 4),
        ];
        let table = SupportTable::new(&sets);
        let pair = ItemSet::new([ItemId(0), ItemId(1)]).unwrap();
        assert_eq!(table.get(&pair).map(|f| f.count()), Some(2));
        assert!(table.get(&ItemSet::single(ItemId(1))).is_none());
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn deserialize_recomputes_support() {
        let json = r#"{"items":[1,0],"count":2,"transactions":4,"support":0.9}"#;
        let f: FrequentItemSet = serde_json::from_str(json).unwrap();
        assert_eq!(f.support(), 0.5);
        assert_eq!(f.items(), &ItemSet::new([ItemId(0), ItemId(1)]).unwrap());
    }

    #[test]
    fn deserialize_clamps_count() {
        let json = r#"{"items":[0],"count":7,"transactions":4}"#;
        let f: FrequentItemSet = serde_json::from_str(json).unwrap();
        assert_eq!(f.count(), 4);
        assert_eq!(f.support(), 1.0);
    }

    #[test]
    fn deserialize_rejects_empty_items() {
        let json = r#"{"items":[],"count":1,"transactions":4}"#;
        assert!(serde_json::from_str::<FrequentItemSet>(json).is_err());
    }
}

//! Canonical itemset representation.

use std::fmt;

use serde::{Deserialize, Serialize};

use basket_core::types::{ItemId, ItemInterner, ItemVec};

/// Non-empty set of items, stored as strictly ascending column indices.
///
/// Canonical form makes derived `Eq`/`Hash` order-independent, and derived
/// `Ord` compares label sequences lexicographically (the vocabulary is
/// label-sorted).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<ItemId>")]
pub struct ItemSet(ItemVec);

impl TryFrom<Vec<ItemId>> for ItemSet {
    type Error = String;

    /// Canonicalizes like [`ItemSet::new`].
    fn try_from(items: Vec<ItemId>) -> Result<Self, Self::Error> {
        Self::new(items).ok_or_else(|| "itemset must contain at least one item".to_string())
    }
}

impl ItemSet {
    /// Build from items in any order; duplicates collapse. `None` if empty.
    pub fn new(items: impl IntoIterator<Item = ItemId>) -> Option<Self> {
        let mut v: ItemVec = items.into_iter().collect();
        if v.is_empty() {
            return None;
        }
        v.sort_unstable();
        v.dedup();
        Some(Self(v))
    }

    pub fn single(item: ItemId) -> Self {
        let mut v = ItemVec::new();
        v.push(item);
        Self(v)
    }

    /// Resolve labels through the vocabulary. `None` if any label is unknown
    /// or `labels` is empty.
    pub fn from_labels<S: AsRef<str>>(vocabulary: &ItemInterner, labels: &[S]) -> Option<Self> {
        let ids: Option<ItemVec> =
            labels.iter().map(|l| vocabulary.get(l.as_ref())).collect();
        Self::new(ids?)
    }

    /// Caller guarantees `items` is non-empty and strictly ascending.
    pub(crate) fn from_sorted(items: ItemVec) -> Self {
        debug_assert!(!items.is_empty());
        debug_assert!(items.windows(2).all(|w| w[0] < w[1]));
        Self(items)
    }

    pub fn items(&self) -> &[ItemId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.0.binary_search(&item).is_ok()
    }

    pub fn is_subset_of(&self, other: &ItemSet) -> bool {
        self.0.iter().all(|&i| other.contains(i))
    }

    pub fn is_disjoint(&self, other: &ItemSet) -> bool {
        self.0.iter().all(|&i| !other.contains(i))
    }

    pub fn union(&self, other: &ItemSet) -> ItemSet {
        let mut v = self.0.clone();
        v.extend(other.0.iter().copied());
        v.sort_unstable();
        v.dedup();
        Self(v)
    }

    /// Items of `self` not in `other`; `None` if that leaves nothing.
    pub fn difference(&self, other: &ItemSet) -> Option<ItemSet> {
        Self::new(self.0.iter().copied().filter(|&i| !other.contains(i)))
    }

    /// The `len() - 1` subsets obtained by dropping one item each.
    /// Empty for a singleton.
    pub fn drop_one_subsets(&self) -> impl Iterator<Item = ItemSet> + '_ {
        let n = if self.len() > 1 { self.len() } else { 0 };
        (0..n).map(move |skip| {
            Self(
                self.0
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| i != skip)
                    .map(|(_, &id)| id)
                    .collect(),
            )
        })
    }

    /// Labels in ascending order; unknown columns are skipped.
    pub fn labels(&self, vocabulary: &ItemInterner) -> Vec<String> {
        self.0
            .iter()
            .filter_map(|&id| vocabulary.resolve(id))
            .map(str::to_string)
            .collect()
    }

    /// `{a, b}` rendering with labels.
    pub fn display<'a>(&'a self, vocabulary: &'a ItemInterner) -> LabelledItemSet<'a> {
        LabelledItemSet {
            set: self,
            vocabulary,
        }
    }
}

impl fmt::Display for ItemSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, id) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", id)?;
        }
        f.write_str("}")
    }
}

/// Display adapter that prints labels instead of column ids.
pub struct LabelledItemSet<'a> {
    set: &'a ItemSet,
    vocabulary: &'a ItemInterner,
}

impl fmt::Display for LabelledItemSet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, &id) in self.set.items().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(self.vocabulary.resolve(id).unwrap_or("?"))?;
        }
        f.write_str("}")
    }
}

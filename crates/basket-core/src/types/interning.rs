//! Item vocabulary interning.
//!
//! Labels are sorted before they are interned into a `lasso::Rodeo`, so the
//! interner key of each label doubles as its column index. The interner is
//! frozen into a `RodeoReader` for contention-free reads while mining.

use std::fmt;

use lasso::{Rodeo, RodeoReader};

use super::identifiers::ItemId;

/// Frozen, lexicographically ordered item vocabulary.
pub struct ItemInterner {
    inner: RodeoReader,
}

impl ItemInterner {
    /// Build a vocabulary from labels. Duplicates collapse; order of the
    /// input does not matter.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut sorted: Vec<String> = labels
            .into_iter()
            .map(|l| l.as_ref().to_string())
            .collect();
        sorted.sort_unstable();
        sorted.dedup();

        let mut rodeo = Rodeo::default();
        for label in &sorted {
            rodeo.get_or_intern(label.as_str());
        }
        Self {
            inner: rodeo.into_reader(),
        }
    }

    /// Look up the column of a label without inserting.
    pub fn get(&self, label: &str) -> Option<ItemId> {
        self.inner.get(label).map(ItemId::from)
    }

    /// Resolve a column back to its label.
    pub fn resolve(&self, id: ItemId) -> Option<&str> {
        id.spur().and_then(|spur| self.inner.try_resolve(&spur))
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Labels in column order.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        (0..self.len() as u32).filter_map(move |i| self.resolve(ItemId(i)))
    }
}

impl fmt::Debug for ItemInterner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemInterner")
            .field("len", &self.len())
            .finish()
    }
}

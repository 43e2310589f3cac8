//! Dense boolean incidence matrix.

use std::sync::Arc;

use basket_core::types::{ItemId, ItemInterner, TransactionId};

use super::bitset::{for_each_set_bit, locate, words_for};
use crate::itemsets::ItemSet;

/// Rows = transactions (ascending by id), columns = items (ascending by
/// label). Immutable once built; the miner only ever reads it.
#[derive(Debug)]
pub struct IncidenceMatrix {
    vocabulary: Arc<ItemInterner>,
    transaction_ids: Vec<TransactionId>,
    words_per_row: usize,
    /// Row-major bits, `words_per_row` words per transaction.
    bits: Vec<u64>,
}

/// Borrowed view of one transaction's row.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    words: &'a [u64],
}

impl<'a> Row<'a> {
    pub fn contains(&self, item: ItemId) -> bool {
        let (w, bit) = locate(item);
        self.words.get(w).is_some_and(|word| word & bit != 0)
    }

    /// Items present in the row, ascending.
    pub fn items(&self) -> Vec<ItemId> {
        let mut out = Vec::new();
        for_each_set_bit(self.words, |c| out.push(ItemId(c as u32)));
        out
    }

    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    pub fn words(&self) -> &'a [u64] {
        self.words
    }
}

impl IncidenceMatrix {
    /// Build from already-grouped rows. `rows` must be sorted by id with no
    /// duplicate ids, and every item must be a column of `vocabulary`.
    pub(crate) fn from_rows(
        vocabulary: Arc<ItemInterner>,
        rows: Vec<(TransactionId, Vec<ItemId>)>,
    ) -> Self {
        let words_per_row = words_for(vocabulary.len());
        let mut bits = vec![0u64; words_per_row * rows.len()];
        let mut transaction_ids = Vec::with_capacity(rows.len());

        for (r, (tid, items)) in rows.into_iter().enumerate() {
            let row = &mut bits[r * words_per_row..(r + 1) * words_per_row];
            for item in items {
                let (w, bit) = locate(item);
                row[w] |= bit;
            }
            transaction_ids.push(tid);
        }

        Self {
            vocabulary,
            transaction_ids,
            words_per_row,
            bits,
        }
    }

    pub fn vocabulary(&self) -> &Arc<ItemInterner> {
        &self.vocabulary
    }

    pub fn transaction_count(&self) -> usize {
        self.transaction_ids.len()
    }

    pub fn item_count(&self) -> usize {
        self.vocabulary.len()
    }

    /// Transaction ids in row order.
    pub fn transaction_ids(&self) -> &[TransactionId] {
        &self.transaction_ids
    }

    /// Row of a transaction, if present.
    pub fn row(&self, id: &TransactionId) -> Option<Row<'_>> {
        self.transaction_ids
            .binary_search(id)
            .ok()
            .map(|r| self.row_at(r))
    }

    /// Row by position. Panics if `index >= transaction_count()`.
    pub fn row_at(&self, index: usize) -> Row<'_> {
        let start = index * self.words_per_row;
        Row {
            words: &self.bits[start..start + self.words_per_row],
        }
    }

    /// Cell lookup by labels; unknown transaction or item is `false`.
    pub fn contains(&self, id: &TransactionId, label: &str) -> bool {
        match (self.row(id), self.vocabulary.get(label)) {
            (Some(row), Some(item)) => row.contains(item),
            _ => false,
        }
    }

    /// Number of rows containing every item of `items`.
    pub fn count_containing(&self, items: &ItemSet) -> u64 {
        let mask = super::ItemMask::from_itemset(items);
        self.rows_raw()
            .chunks_exact(self.words_per_row.max(1))
            .filter(|row| mask.is_subset_of(row))
            .count() as u64
    }

    pub(crate) fn words_per_row(&self) -> usize {
        self.words_per_row
    }

    pub(crate) fn rows_raw(&self) -> &[u64] {
        &self.bits
    }
}

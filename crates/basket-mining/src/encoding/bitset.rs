//! Word-level bit operations over incidence rows.
//!
//! Rows are stored as `u64` words, bit `i % 64` of word `i / 64` standing for
//! column `i`. A candidate itemset is turned into an [`ItemMask`] that keeps
//! only its non-zero words, so a subset test touches at most `k` words no
//! matter how wide the vocabulary is.

use smallvec::SmallVec;

use basket_core::types::ItemId;

use crate::itemsets::ItemSet;

pub(crate) const WORD_BITS: usize = 64;

/// Number of words needed to hold `columns` bits.
pub(crate) fn words_for(columns: usize) -> usize {
    columns.div_ceil(WORD_BITS)
}

#[inline]
pub(crate) fn locate(id: ItemId) -> (usize, u64) {
    let i = id.index();
    (i / WORD_BITS, 1u64 << (i % WORD_BITS))
}

/// Sparse bit mask of one itemset: `(word index, bits)` pairs, ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemMask {
    words: SmallVec<[(u32, u64); 4]>,
}

impl ItemMask {
    pub fn from_itemset(items: &ItemSet) -> Self {
        let mut words: SmallVec<[(u32, u64); 4]> = SmallVec::new();
        // Items are sorted, so equal word indices arrive adjacently.
        for &id in items.items() {
            let (w, bit) = locate(id);
            match words.last_mut() {
                Some((last, bits)) if *last as usize == w => *bits |= bit,
                _ => words.push((w as u32, bit)),
            }
        }
        Self { words }
    }

    /// True when every bit of the mask is set in `row`.
    #[inline]
    pub fn is_subset_of(&self, row: &[u64]) -> bool {
        self.words
            .iter()
            .all(|&(w, bits)| row.get(w as usize).is_some_and(|r| r & bits == bits))
    }
}

/// Visit the column index of every set bit in `row`.
#[inline]
pub(crate) fn for_each_set_bit(row: &[u64], mut f: impl FnMut(usize)) {
    for (w, &word) in row.iter().enumerate() {
        let mut bits = word;
        while bits != 0 {
            let tz = bits.trailing_zeros() as usize;
            f(w * WORD_BITS + tz);
            bits &= bits - 1;
        }
    }
}

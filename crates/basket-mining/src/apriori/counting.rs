//! Parallel support counting.
//!
//! The matrix is split into disjoint row chunks, each rayon task counts into
//! a private vector, and the vectors are summed element-wise. Nothing is
//! written to the shared matrix.

use rayon::prelude::*;

use crate::encoding::bitset::for_each_set_bit;
use crate::encoding::{IncidenceMatrix, ItemMask};

/// Per-column row counts (level 1).
pub fn count_items(matrix: &IncidenceMatrix, chunk_rows: usize) -> Vec<u64> {
    let columns = matrix.item_count();
    let wpr = matrix.words_per_row();
    if columns == 0 || wpr == 0 {
        return vec![0; columns];
    }
    matrix
        .rows_raw()
        .par_chunks(chunk_rows.max(1) * wpr)
        .map(|chunk| {
            let mut counts = vec![0u64; columns];
            for row in chunk.chunks_exact(wpr) {
                for_each_set_bit(row, |c| counts[c] += 1);
            }
            counts
        })
        .reduce(|| vec![0u64; columns], sum_into)
}

/// Rows containing every item of each mask (levels 2+).
pub fn count_masks(matrix: &IncidenceMatrix, masks: &[ItemMask], chunk_rows: usize) -> Vec<u64> {
    let wpr = matrix.words_per_row();
    if masks.is_empty() || wpr == 0 {
        return vec![0; masks.len()];
    }
    matrix
        .rows_raw()
        .par_chunks(chunk_rows.max(1) * wpr)
        .map(|chunk| {
            let mut counts = vec![0u64; masks.len()];
            for row in chunk.chunks_exact(wpr) {
                for (count, mask) in counts.iter_mut().zip(masks) {
                    if mask.is_subset_of(row) {
                        *count += 1;
                    }
                }
            }
            counts
        })
        .reduce(|| vec![0u64; masks.len()], sum_into)
}

fn sum_into(mut acc: Vec<u64>, other: Vec<u64>) -> Vec<u64> {
    for (a, b) in acc.iter_mut().zip(other) {
        *a += b;
    }
    acc
}

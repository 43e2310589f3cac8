//! Candidate generation: join step and subset prune.

use basket_core::types::{FxHashSet, ItemId, ItemVec};

use crate::itemsets::ItemSet;

/// Result of generating one level's candidates.
#[derive(Debug, Default)]
pub struct CandidateLevel {
    /// Surviving candidates, ascending.
    pub candidates: Vec<ItemSet>,
    /// Joined candidates dropped by the prune.
    pub pruned: usize,
}

/// Join the frequent `k`-itemsets of `level` into `(k+1)`-candidates and
/// prune every candidate that has an infrequent `k`-subset.
///
/// Two `k`-sets are joined when they agree on their first `k - 1` items.
/// Joining on any other shared `k - 1` items cannot add a survivor: such a
/// union also has two `k`-subsets sharing its first `k - 1` items, and the
/// prune requires both to be in `level`. Each union is produced once, so no
/// separate deduplication pass is needed.
///
/// `level` must hold same-sized itemsets; order does not matter.
pub fn generate(level: &[&ItemSet]) -> CandidateLevel {
    let mut sorted: Vec<&ItemSet> = level.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let Some(k) = sorted.first().map(|s| s.len()) else {
        return CandidateLevel::default();
    };
    let frequent: FxHashSet<&ItemSet> = sorted.iter().copied().collect();

    let mut out = CandidateLevel::default();
    let mut start = 0;
    while start < sorted.len() {
        // Sorted order keeps sets with a common (k-1)-prefix contiguous.
        let prefix = &sorted[start].items()[..k - 1];
        let end = start
            + sorted[start..]
                .iter()
                .take_while(|s| &s.items()[..k - 1] == prefix)
                .count();

        for i in start..end {
            for j in (i + 1)..end {
                let a = sorted[i].items();
                let b = sorted[j].items();
                let mut items: ItemVec = ItemVec::with_capacity(k + 1);
                items.extend_from_slice(a);
                items.push(b[k - 1]);
                let candidate = ItemSet::from_sorted(items);

                if has_infrequent_subset(&candidate, &frequent) {
                    out.pruned += 1;
                } else {
                    out.candidates.push(candidate);
                }
            }
        }
        start = end;
    }
    out
}

/// The two subsets missing one of the last two items are the join parents
/// and known frequent; only the others need a lookup.
fn has_infrequent_subset(candidate: &ItemSet, frequent: &FxHashSet<&ItemSet>) -> bool {
    let n = candidate.len();
    if n <= 2 {
        return false;
    }
    candidate
        .drop_one_subsets()
        .take(n - 2)
        .any(|subset| !frequent.contains(&subset))
}

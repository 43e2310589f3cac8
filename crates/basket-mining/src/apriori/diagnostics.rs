//! Per-run mining diagnostics.

use serde::{Deserialize, Serialize};

/// Counts for one level of the search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelStats {
    /// Itemset size.
    pub level: usize,
    /// Candidates counted against the matrix.
    pub candidates: usize,
    /// Joined candidates dropped by the subset prune before counting.
    pub pruned: usize,
    /// Candidates that met the support threshold.
    pub frequent: usize,
}

/// Summary of a mining run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MiningDiagnostics {
    pub transactions: usize,
    pub vocabulary: usize,
    pub min_support: f64,
    pub levels: Vec<LevelStats>,
    pub frequent_itemsets: usize,
    pub duration_ms: u64,
}

impl MiningDiagnostics {
    /// Largest itemset size that produced a frequent itemset.
    pub fn max_level(&self) -> usize {
        self.levels
            .iter()
            .filter(|l| l.frequent > 0)
            .map(|l| l.level)
            .max()
            .unwrap_or(0)
    }

    /// Candidates counted across all levels.
    pub fn total_candidates(&self) -> usize {
        self.levels.iter().map(|l| l.candidates).sum()
    }

    /// Fraction of joined candidates removed by the prune, 0.0 if none were joined.
    pub fn prune_ratio(&self) -> f64 {
        let pruned: usize = self.levels.iter().map(|l| l.pruned).sum();
        let joined = pruned + self.levels.iter().skip(1).map(|l| l.candidates).sum::<usize>();
        if joined == 0 {
            0.0
        } else {
            pruned as f64 / joined as f64
        }
    }
}

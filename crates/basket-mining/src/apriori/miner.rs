//! Level-wise Apriori driver.

use std::sync::Arc;
use std::time::Instant;

use basket_core::errors::MiningError;
use basket_core::events::{EventDispatcher, LevelCompleteEvent, MineCompleteEvent, MineStartedEvent};
use basket_core::traits::Cancellable;
use basket_core::types::ItemId;

use super::candidates;
use super::config::AprioriConfig;
use super::counting::{count_items, count_masks};
use super::diagnostics::{LevelStats, MiningDiagnostics};
use crate::encoding::{IncidenceMatrix, ItemMask};
use crate::itemsets::{FrequentItemSet, ItemSet};

/// Frequent itemsets of every level plus run diagnostics.
#[derive(Debug, Clone, Default)]
pub struct MiningOutcome {
    /// Level 1 first, then level 2, ...; each level ascending by items.
    pub itemsets: Vec<FrequentItemSet>,
    pub diagnostics: MiningDiagnostics,
}

/// Apriori miner over an incidence matrix.
pub struct AprioriMiner {
    config: AprioriConfig,
    cancel: Option<Arc<dyn Cancellable>>,
    events: EventDispatcher,
}

impl AprioriMiner {
    pub fn new(config: AprioriConfig) -> Self {
        Self {
            config,
            cancel: None,
            events: EventDispatcher::new(),
        }
    }

    /// Poll `token` before each level.
    pub fn with_cancellation(mut self, token: Arc<dyn Cancellable>) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn with_events(mut self, events: EventDispatcher) -> Self {
        self.events = events;
        self
    }

    pub fn config(&self) -> &AprioriConfig {
        &self.config
    }

    /// Mine every itemset with support ≥ `min_support`.
    ///
    /// An empty result is a valid outcome. Errors only on cancellation; a
    /// cancelled run returns no itemsets at all.
    pub fn mine(&self, matrix: &IncidenceMatrix) -> Result<MiningOutcome, MiningError> {
        let start = Instant::now();
        let n = matrix.transaction_count() as u64;
        let min_support = self.config.min_support();
        let chunk_rows = self.config.count_chunk_rows();
        let max_len = self.config.max_len().unwrap_or(usize::MAX);

        let span = tracing::info_span!(
            "mine",
            transactions = n,
            vocabulary = matrix.item_count(),
            min_support
        );
        let _guard = span.enter();

        self.events.emit_mine_started(&MineStartedEvent {
            transactions: n as usize,
            vocabulary: matrix.item_count(),
            min_support,
        });

        let mut diagnostics = MiningDiagnostics {
            transactions: n as usize,
            vocabulary: matrix.item_count(),
            min_support,
            ..Default::default()
        };
        let mut levels: Vec<Vec<FrequentItemSet>> = Vec::new();

        self.checkpoint()?;
        let singles: Vec<FrequentItemSet> = count_items(matrix, chunk_rows)
            .into_iter()
            .enumerate()
            .map(|(col, count)| FrequentItemSet::new(ItemSet::single(ItemId(col as u32)), count, n))
            .filter(|f| f.support() >= min_support)
            .collect();
        self.record_level(
            &mut diagnostics,
            LevelStats {
                level: 1,
                candidates: matrix.item_count(),
                pruned: 0,
                frequent: singles.len(),
            },
        );
        levels.push(singles);

        let mut k = 1;
        while k < max_len {
            let Some(current) = levels.last().filter(|l| !l.is_empty()) else {
                break;
            };
            self.checkpoint()?;

            let parents: Vec<&ItemSet> = current.iter().map(|f| f.items()).collect();
            let joined = candidates::generate(&parents);
            if joined.candidates.is_empty() {
                self.record_level(
                    &mut diagnostics,
                    LevelStats {
                        level: k + 1,
                        candidates: 0,
                        pruned: joined.pruned,
                        frequent: 0,
                    },
                );
                break;
            }

            let masks: Vec<ItemMask> = joined.candidates.iter().map(ItemMask::from_itemset).collect();
            let counts = count_masks(matrix, &masks, chunk_rows);
            let candidate_count = joined.candidates.len();
            let next: Vec<FrequentItemSet> = joined
                .candidates
                .into_iter()
                .zip(counts)
                .map(|(items, count)| FrequentItemSet::new(items, count, n))
                .filter(|f| f.support() >= min_support)
                .collect();

            self.record_level(
                &mut diagnostics,
                LevelStats {
                    level: k + 1,
                    candidates: candidate_count,
                    pruned: joined.pruned,
                    frequent: next.len(),
                },
            );
            levels.push(next);
            k += 1;
        }

        let itemsets: Vec<FrequentItemSet> = levels.into_iter().flatten().collect();
        diagnostics.frequent_itemsets = itemsets.len();
        diagnostics.duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            frequent = itemsets.len(),
            levels = diagnostics.levels.len(),
            duration_ms = diagnostics.duration_ms,
            "mining complete"
        );
        self.events.emit_mine_complete(&MineCompleteEvent {
            frequent_itemsets: itemsets.len(),
            levels: diagnostics.levels.len(),
            duration_ms: diagnostics.duration_ms,
        });

        Ok(MiningOutcome {
            itemsets,
            diagnostics,
        })
    }

    fn checkpoint(&self) -> Result<(), MiningError> {
        match &self.cancel {
            Some(token) => token.checkpoint().inspect_err(|_| {
                tracing::info!("mining cancelled between levels");
            }),
            None => Ok(()),
        }
    }

    fn record_level(&self, diagnostics: &mut MiningDiagnostics, stats: LevelStats) {
        tracing::debug!(
            level = stats.level,
            candidates = stats.candidates,
            pruned = stats.pruned,
            frequent = stats.frequent,
            "level complete"
        );
        self.events.emit_level_complete(&LevelCompleteEvent {
            level: stats.level,
            candidates: stats.candidates,
            pruned: stats.pruned,
            frequent: stats.frequent,
        });
        diagnostics.levels.push(stats);
    }
}

/// Mine `matrix` at `min_support` with default settings.
pub fn mine(matrix: &IncidenceMatrix, min_support: f64) -> Result<Vec<FrequentItemSet>, MiningError> {
    let config = AprioriConfig::new(min_support)?;
    AprioriMiner::new(config).mine(matrix).map(|o| o.itemsets)
}

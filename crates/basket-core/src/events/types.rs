//! Event payload types.

/// Payload for `on_mine_started`.
#[derive(Debug, Clone)]
pub struct MineStartedEvent {
    pub transactions: usize,
    pub vocabulary: usize,
    pub min_support: f64,
}

/// Payload for `on_level_complete`.
#[derive(Debug, Clone)]
pub struct LevelCompleteEvent {
    /// Itemset size of the level.
    pub level: usize,
    pub candidates: usize,
    pub pruned: usize,
    pub frequent: usize,
}

/// Payload for `on_mine_complete`.
#[derive(Debug, Clone)]
pub struct MineCompleteEvent {
    pub frequent_itemsets: usize,
    pub levels: usize,
    pub duration_ms: u64,
}

/// Payload for `on_rules_generated`.
#[derive(Debug, Clone)]
pub struct RulesGeneratedEvent {
    pub metric: String,
    pub min_threshold: f64,
    /// Splits examined before threshold filtering.
    pub evaluated: usize,
    pub retained: usize,
}

/// Payload for `on_error`.
#[derive(Debug, Clone)]
pub struct ErrorEvent {
    pub code: String,
    pub message: String,
}

//! MiningEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Observer of a mining run.
///
/// Handlers override only the events they care about. `Send + Sync` because
/// a run may emit from rayon worker threads.
pub trait MiningEventHandler: Send + Sync {
    fn on_mine_started(&self, _event: &MineStartedEvent) {}
    fn on_level_complete(&self, _event: &LevelCompleteEvent) {}
    fn on_mine_complete(&self, _event: &MineCompleteEvent) {}
    fn on_rules_generated(&self, _event: &RulesGeneratedEvent) {}
    fn on_error(&self, _event: &ErrorEvent) {}
}

//! EventDispatcher, synchronous fan-out to registered handlers.

use std::sync::Arc;

use super::handler::MiningEventHandler;
use super::types::*;

/// Synchronous dispatcher over a list of handlers.
///
/// With no handlers registered every `emit_*` is a loop over an empty Vec.
#[derive(Clone, Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn MiningEventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn MiningEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Deliver to every handler. A panicking handler is logged and skipped so
    /// the remaining handlers still receive the event.
    fn emit<F: Fn(&dyn MiningEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!("mining event handler panicked; continuing with remaining handlers");
            }
        }
    }

    pub fn emit_mine_started(&self, event: &MineStartedEvent) {
        self.emit(|h| h.on_mine_started(event));
    }

    pub fn emit_level_complete(&self, event: &LevelCompleteEvent) {
        self.emit(|h| h.on_level_complete(event));
    }

    pub fn emit_mine_complete(&self, event: &MineCompleteEvent) {
        self.emit(|h| h.on_mine_complete(event));
    }

    pub fn emit_rules_generated(&self, event: &RulesGeneratedEvent) {
        self.emit(|h| h.on_rules_generated(event));
    }

    pub fn emit_error(&self, event: &ErrorEvent) {
        self.emit(|h| h.on_error(event));
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

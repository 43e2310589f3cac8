//! Cooperative cancellation for mining runs.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::errors::MiningError;

/// Anything a mining run can poll to learn it should stop.
///
/// The miner polls between levels and the rule generator between itemset
/// batches; a level that has started is always finished or discarded whole.
pub trait Cancellable: Send + Sync {
    /// Check if cancellation has been requested.
    fn is_cancelled(&self) -> bool;

    /// Request cancellation.
    fn cancel(&self);

    /// `Err(MiningError::Cancelled)` once cancellation has been requested.
    fn checkpoint(&self) -> Result<(), MiningError> {
        if self.is_cancelled() {
            Err(MiningError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Shared-flag token. Clones observe the same flag, so a caller keeps one
/// clone and hands another to the run.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Cancellable for CancellationToken {
    fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }
}

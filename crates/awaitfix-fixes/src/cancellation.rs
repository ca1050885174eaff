//! Cooperative cancellation for fix requests.

use crate::error::FixError;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared cancellation flag. Clones observe the same flag, so a host can keep
/// one clone and hand another to a worker thread computing fixes.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Checkpoint: `Err(FixError::Cancelled)` once cancellation was requested.
    pub fn check(&self) -> Result<(), FixError> {
        if self.is_cancelled() {
            return Err(FixError::Cancelled);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/cancellation_tests.rs"]
mod tests;

//! Stage-boundary cancellation for clustering runs.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::debug;

use crate::errors::{PhyloError, PhyloResult};

/// A flag a clustering run consults between its stages.
///
/// The matrix build and the pairing loop never look at it mid-stage, so a
/// request made while a stage runs takes effect at the next boundary.
pub trait Cancellable {
    fn is_cancelled(&self) -> bool;

    /// Ask the run to stop at its next stage boundary.
    fn cancel(&self);

    /// `Err(Cancelled)` if a stop was requested before `stage` starts.
    fn checkpoint(&self, stage: &'static str) -> PhyloResult<()> {
        if self.is_cancelled() {
            debug!(stage, "run cancelled before stage");
            return Err(PhyloError::Cancelled);
        }
        Ok(())
    }
}

/// Shareable stop request; every clone observes the same flag, so one can
/// be handed to another thread while the run holds the other.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    requested: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Cancellable for CancellationToken {
    fn is_cancelled(&self) -> bool {
        self.requested.load(Ordering::Acquire)
    }

    fn cancel(&self) {
        self.requested.store(true, Ordering::Release);
    }
}

/// A bare flag works too, for callers that already own one.
impl Cancellable for AtomicBool {
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Acquire)
    }

    fn cancel(&self) {
        self.store(true, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let token = CancellationToken::new();
        let handle = token.clone();
        assert!(!token.is_cancelled());
        handle.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn checkpoint_reports_cancellation() {
        let flag = AtomicBool::new(false);
        assert!(flag.checkpoint("matrix").is_ok());
        flag.cancel();
        assert!(matches!(flag.checkpoint("pairing"), Err(PhyloError::Cancelled)));
    }
}

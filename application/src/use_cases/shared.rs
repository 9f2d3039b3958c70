//! Shared pieces for the advisor use cases.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

/// Errors returned by the advisor use cases
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdvisorError {
    #[error("Select a skin type before analyzing")]
    MissingSkinType,

    #[error("Describe the occasion before asking for outfits")]
    MissingOccasion,

    #[error("An analysis is already running")]
    Busy,
}

/// Single-flight flag for an advisor
#[derive(Debug, Default, Clone)]
pub(crate) struct InFlight(Arc<AtomicBool>);

impl InFlight {
    /// Claim the flag, or `Busy` if it is already held
    pub(crate) fn acquire(&self) -> Result<InFlightGuard, AdvisorError> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| AdvisorError::Busy)?;
        Ok(InFlightGuard(self.0.clone()))
    }

    pub(crate) fn is_active(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Releases the flag on drop, including when the analysis future is dropped
pub(crate) struct InFlightGuard(Arc<AtomicBool>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

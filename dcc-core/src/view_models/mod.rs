//! View models for the admin dashboard
//!
//! Each view model owns one piece of remote state and publishes whole
//! snapshots through a `tokio::sync::watch` channel, so subscribers never see
//! a half-updated record. Fetches are stamped with a generation; an outcome
//! that arrives after a newer fetch has settled is dropped, failures included.

mod queue;
mod release;
mod systems;

pub use queue::ValidationQueueService;
pub use release::{ReleaseTarget, ReleaseViewModel};
pub use systems::SystemsViewModel;

use crate::error::ApiError;
use std::cell::Cell;

/// Generation stamps for one view model's fetches
#[derive(Debug, Default)]
pub(crate) struct Generations {
    issued: Cell<u64>,
    settled: Cell<u64>,
}

impl Generations {
    pub(crate) fn issue(&self) -> u64 {
        let generation = self.issued.get() + 1;
        self.issued.set(generation);
        generation
    }

    /// Settle `generation` with its outcome, success or failure.
    ///
    /// Once a newer fetch has settled, an older outcome is replaced by
    /// [`ApiError::Superseded`] so it can neither overwrite the snapshot nor
    /// report an error over it.
    pub(crate) fn settle<T>(
        &self,
        generation: u64,
        outcome: Result<T, ApiError>,
    ) -> Result<T, ApiError> {
        if generation > self.settled.get() {
            self.settled.set(generation);
            outcome
        } else {
            Err(ApiError::Superseded)
        }
    }
}

/// Rejects a second request of the same kind while one is pending
#[derive(Debug, Default)]
pub(crate) struct InFlight {
    busy: Cell<bool>,
}

impl InFlight {
    pub(crate) fn enter(&self) -> Result<InFlightToken<'_>, ApiError> {
        if self.busy.replace(true) {
            return Err(ApiError::InFlight);
        }
        Ok(InFlightToken { busy: &self.busy })
    }

    pub(crate) fn is_busy(&self) -> bool {
        self.busy.get()
    }
}

pub(crate) struct InFlightToken<'a> {
    busy: &'a Cell<bool>,
}

impl Drop for InFlightToken<'_> {
    fn drop(&mut self) {
        self.busy.set(false);
    }
}

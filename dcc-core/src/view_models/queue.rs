use super::{Generations, InFlight};
use crate::client::AdminApi;
use crate::error::ApiError;
use std::rc::Rc;
use tokio::sync::watch;
use tracing::{debug, info};

/// Validation queue: project keys waiting for or undergoing validation.
///
/// The published queue is always the result of the last successful fetch;
/// clearing does not touch it.
pub struct ValidationQueueService<A: AdminApi> {
    api: Rc<A>,
    state: watch::Sender<Vec<String>>,
    generations: Generations,
    clearing: InFlight,
}

impl<A: AdminApi> ValidationQueueService<A> {
    pub fn new(api: Rc<A>) -> Self {
        Self {
            api,
            state: watch::Sender::new(Vec::new()),
            generations: Generations::default(),
            clearing: InFlight::default(),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<String>> {
        self.state.subscribe()
    }

    pub fn current(&self) -> Vec<String> {
        self.state.borrow().clone()
    }

    pub fn is_clearing(&self) -> bool {
        self.clearing.is_busy()
    }

    /// Fetch the queued project keys, in queue order.
    ///
    /// Fails with [`ApiError::Superseded`] when a newer fetch settled first.
    pub async fn fetch_queue(&self) -> Result<Vec<String>, ApiError> {
        let generation = self.generations.issue();
        let outcome = self.api.validation_queue().await;
        let queue = match self.generations.settle(generation, outcome) {
            Err(ApiError::Superseded) => {
                debug!("Dropping stale validation queue response");
                return Err(ApiError::Superseded);
            }
            other => other?,
        };

        debug!("Validation queue loaded: {} project(s)", queue.len());
        self.state.send_replace(queue.clone());
        Ok(queue)
    }

    /// Remove every queued project. Re-fetch to observe the result.
    pub async fn clear_queue(&self) -> Result<(), ApiError> {
        let _token = self.clearing.enter()?;
        info!("Clearing validation queue");
        self.api.clear_validation_queue().await
    }
}

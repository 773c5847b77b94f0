use super::{Generations, InFlight};
use crate::client::AdminApi;
use crate::error::ApiError;
use crate::models::SystemsStatus;
use std::rc::Rc;
use tokio::sync::watch;
use tracing::{debug, info};

/// Release-lock flag and active SFTP sessions.
///
/// Lock and unlock never touch the local flag; the new state becomes visible
/// with the next [`fetch`](Self::fetch).
pub struct SystemsViewModel<A: AdminApi> {
    api: Rc<A>,
    state: watch::Sender<SystemsStatus>,
    generations: Generations,
    locking: InFlight,
}

impl<A: AdminApi> SystemsViewModel<A> {
    pub fn new(api: Rc<A>) -> Self {
        Self {
            api,
            state: watch::Sender::new(SystemsStatus::default()),
            generations: Generations::default(),
            locking: InFlight::default(),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<SystemsStatus> {
        self.state.subscribe()
    }

    pub fn current(&self) -> SystemsStatus {
        self.state.borrow().clone()
    }

    pub fn is_release_locked(&self) -> bool {
        self.state.borrow().is_release_locked
    }

    /// Whether a lock or unlock request is pending
    pub fn is_locking(&self) -> bool {
        self.locking.is_busy()
    }

    pub async fn fetch(&self) -> Result<(), ApiError> {
        let generation = self.generations.issue();
        let outcome = self.api.systems().await;
        let status = match self.generations.settle(generation, outcome) {
            Err(ApiError::Superseded) => {
                debug!("Dropping stale systems response");
                return Err(ApiError::Superseded);
            }
            other => other?,
        };

        debug!(
            "Systems loaded: locked={}, sftp sessions={}",
            status.is_release_locked, status.active_sftp_sessions
        );
        self.state.send_replace(status);
        Ok(())
    }

    /// Prevent uploading and validation on non-admin accounts.
    pub async fn lock_release(&self) -> Result<(), ApiError> {
        self.set_locked(true).await
    }

    /// Allow uploading and validation on non-admin accounts again.
    pub async fn unlock_release(&self) -> Result<(), ApiError> {
        self.set_locked(false).await
    }

    async fn set_locked(&self, locked: bool) -> Result<(), ApiError> {
        let _token = self.locking.enter()?;
        info!("{} submissions", if locked { "Locking" } else { "Unlocking" });
        self.api.set_submissions_active(!locked).await
    }
}

//! Orchestration behind the admin dashboard's buttons.
//!
//! `AdminController` owns the three view models and the per-action status the
//! view renders. Every entry point is an `async fn` the UI spawns; the view
//! only ever reads snapshots.

use crate::client::AdminApi;
use crate::error::ApiError;
use crate::view_models::{
    ReleaseTarget, ReleaseViewModel, SystemsViewModel, ValidationQueueService,
};
use dcc_common::ActionStatus;
use std::fmt;
use std::rc::Rc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Dashboard section a background fetch belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Systems,
    Release,
    ValidationQueue,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Systems => write!(f, "systems"),
            Section::Release => write!(f, "release"),
            Section::ValidationQueue => write!(f, "validation queue"),
        }
    }
}

/// A fetch that failed; the section keeps its previous snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadError {
    pub section: Section,
    pub message: String,
}

/// Action state rendered next to the dashboard's controls
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminUiState {
    pub lock: ActionStatus,
    pub release: ActionStatus,
    pub clear_queue: ActionStatus,
    /// At most one entry per section, replaced by the next fetch of it
    pub load_errors: Vec<LoadError>,
    /// Set once the server rejects the stored credentials
    pub session_expired: bool,
}

pub struct AdminController<A: AdminApi> {
    pub release: ReleaseViewModel<A>,
    pub systems: SystemsViewModel<A>,
    pub queue: ValidationQueueService<A>,
    ui: watch::Sender<AdminUiState>,
}

impl<A: AdminApi> AdminController<A> {
    pub fn new(api: A) -> Self {
        Self::with_shared(Rc::new(api))
    }

    pub fn with_shared(api: Rc<A>) -> Self {
        Self {
            release: ReleaseViewModel::new(api.clone()),
            systems: SystemsViewModel::new(api.clone()),
            queue: ValidationQueueService::new(api),
            ui: watch::Sender::new(AdminUiState::default()),
        }
    }

    pub fn subscribe_ui(&self) -> watch::Receiver<AdminUiState> {
        self.ui.subscribe()
    }

    pub fn ui_state(&self) -> AdminUiState {
        self.ui.borrow().clone()
    }

    /// Forget an expired session once the user has been sent to log in again.
    pub fn clear_session_expired(&self) {
        self.ui.send_if_modified(|ui| std::mem::replace(&mut ui.session_expired, false));
    }

    /// Fetch systems, the upcoming release and the validation queue.
    ///
    /// The three requests run concurrently and fail independently.
    pub async fn load(&self) {
        let (systems, release, queue) = futures::join!(
            self.systems.fetch(),
            self.release.fetch(ReleaseTarget::Upcoming),
            self.queue.fetch_queue(),
        );

        self.record_fetch(Section::Systems, systems);
        self.record_fetch(Section::Release, release);
        self.record_fetch(Section::ValidationQueue, queue.map(|_| ()));
    }

    /// Unlock when locked, lock otherwise.
    pub async fn toggle_lock(&self) -> Result<(), ApiError> {
        let locked = self.systems.is_release_locked();
        self.set_lock(!locked).await
    }

    /// Lock or unlock submissions, then re-fetch systems on success.
    pub async fn set_lock(&self, locked: bool) -> Result<(), ApiError> {
        self.begin(|ui| &mut ui.lock)?;

        let result = if locked {
            self.systems.lock_release().await
        } else {
            self.systems.unlock_release().await
        };
        self.settle(|ui| &mut ui.lock, &result);

        if result.is_ok() {
            let refreshed = self.systems.fetch().await;
            self.record_fetch(Section::Systems, refreshed);
        }
        result
    }

    /// Release the upcoming release and open `next_name`, then show the new one.
    pub async fn perform_release(&self, next_name: &str) -> Result<(), ApiError> {
        self.begin(|ui| &mut ui.release)?;

        let result = self.release.perform_release(next_name).await;
        self.settle(|ui| &mut ui.release, &result);

        if result.is_ok() {
            info!("Release performed");
            let refreshed = self.release.fetch(ReleaseTarget::Upcoming).await;
            self.record_fetch(Section::Release, refreshed);
        }
        result
    }

    /// Clear the validation queue. The queue is re-fetched either way.
    pub async fn clear_queue(&self) -> Result<(), ApiError> {
        self.begin(|ui| &mut ui.clear_queue)?;

        let result = self.queue.clear_queue().await;
        self.settle(|ui| &mut ui.clear_queue, &result);

        let refreshed = self.queue.fetch_queue().await;
        self.record_fetch(Section::ValidationQueue, refreshed.map(|_| ()));
        result
    }

    /// Mark an action pending, or reject it if it already is.
    fn begin(
        &self,
        status: impl Fn(&mut AdminUiState) -> &mut ActionStatus,
    ) -> Result<(), ApiError> {
        let mut started = false;
        self.ui.send_if_modified(|ui| {
            let status = status(ui);
            if status.is_pending() {
                return false;
            }
            *status = ActionStatus::Pending;
            started = true;
            true
        });

        if started {
            Ok(())
        } else {
            Err(ApiError::InFlight)
        }
    }

    fn settle(
        &self,
        status: impl Fn(&mut AdminUiState) -> &mut ActionStatus,
        result: &Result<(), ApiError>,
    ) {
        if let Err(e) = result {
            warn!("Action failed: {}", e);
        }
        self.ui.send_modify(|ui| {
            *status(ui) = ActionStatus::settled(result);
            ui.session_expired |= matches!(result, Err(ApiError::Unauthorized));
        });
    }

    /// A newer fetch of `section` already recorded its outcome when this one
    /// comes back superseded.
    fn record_fetch(&self, section: Section, result: Result<(), ApiError>) {
        if let Err(ApiError::Superseded) = result {
            debug!("Ignoring superseded {} fetch", section);
            return;
        }
        if let Err(e) = &result {
            warn!("Failed to load {}: {}", section, e);
        }
        self.ui.send_modify(|ui| {
            ui.load_errors.retain(|err| err.section != section);
            if let Err(e) = result {
                ui.session_expired |= e.is_unauthorized();
                ui.load_errors.push(LoadError {
                    section,
                    message: e.to_string(),
                });
            }
        });
    }
}

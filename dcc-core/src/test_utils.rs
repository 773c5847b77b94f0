//! In-memory `AdminApi` for tests

use crate::client::AdminApi;
use crate::error::ApiError;
use crate::models::{Release, SystemsStatus};
use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use tokio::sync::{oneshot, watch};

/// One call made against [`FakeAdminApi`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FakeCall {
    UpcomingRelease,
    Release,
    PerformRelease,
    Systems,
    SetSubmissionsActive(bool),
    ValidationQueue,
    ClearValidationQueue,
}

#[derive(Default)]
struct FakeState {
    upcoming: Release,
    releases: Vec<Release>,
    systems: SystemsStatus,
    queue: Vec<String>,
    failures: HashMap<FakeCall, String>,
    gates: HashMap<FakeCall, watch::Receiver<bool>>,
    calls: Vec<FakeCall>,
    session_expired: bool,
    scripted_queue: VecDeque<oneshot::Receiver<Result<Vec<String>, ApiError>>>,
}

/// Holds a gated call until [`open`](Self::open) is called
pub struct FakeGate {
    tx: watch::Sender<bool>,
}

impl FakeGate {
    pub fn open(&self) {
        self.tx.send_replace(true);
    }
}

/// Submission server stand-in that keeps its state in memory.
///
/// Failures and gates are keyed by [`FakeCall`] and stay in place until
/// [`succeed`](Self::succeed) removes them.
#[derive(Default)]
pub struct FakeAdminApi {
    state: RefCell<FakeState>,
}

impl FakeAdminApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_upcoming(&self, release: Release) {
        self.state.borrow_mut().upcoming = release;
    }

    pub fn add_release(&self, release: Release) {
        self.state.borrow_mut().releases.push(release);
    }

    pub fn set_systems(&self, systems: SystemsStatus) {
        self.state.borrow_mut().systems = systems;
    }

    pub fn set_queue(&self, queue: Vec<String>) {
        self.state.borrow_mut().queue = queue;
    }

    pub fn upcoming(&self) -> Release {
        self.state.borrow().upcoming.clone()
    }

    pub fn systems_state(&self) -> SystemsStatus {
        self.state.borrow().systems.clone()
    }

    pub fn queue(&self) -> Vec<String> {
        self.state.borrow().queue.clone()
    }

    /// Make `call` fail with a server error carrying `message`.
    pub fn fail(&self, call: FakeCall, message: &str) {
        self.state
            .borrow_mut()
            .failures
            .insert(call, message.to_string());
    }

    /// Answer every following call with `401 Unauthorized`.
    pub fn expire_session(&self) {
        self.state.borrow_mut().session_expired = true;
    }

    pub fn succeed(&self, call: FakeCall) {
        self.state.borrow_mut().failures.remove(&call);
    }

    /// Hold every `call` until the returned gate is opened.
    pub fn gate(&self, call: FakeCall) -> FakeGate {
        let (tx, rx) = watch::channel(false);
        self.state.borrow_mut().gates.insert(call, rx);
        FakeGate { tx }
    }

    /// Answer the next `validation_queue` call with whatever is sent on the
    /// returned channel instead of the stored queue. Scripted answers are
    /// handed out in call order.
    pub fn script_queue_fetch(&self) -> oneshot::Sender<Result<Vec<String>, ApiError>> {
        let (tx, rx) = oneshot::channel();
        self.state.borrow_mut().scripted_queue.push_back(rx);
        tx
    }

    pub fn calls(&self) -> Vec<FakeCall> {
        self.state.borrow().calls.clone()
    }

    async fn enter(&self, call: FakeCall) -> Result<(), ApiError> {
        let gate = {
            let mut state = self.state.borrow_mut();
            state.calls.push(call.clone());
            state.gates.get(&call).cloned()
        };

        if let Some(mut gate) = gate {
            let _ = gate.wait_for(|open| *open).await;
        }

        let state = self.state.borrow();
        if state.session_expired {
            return Err(ApiError::Unauthorized);
        }
        match state.failures.get(&call) {
            Some(message) => Err(ApiError::Server {
                status: 500,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl AdminApi for FakeAdminApi {
    async fn upcoming_release(&self) -> Result<Release, ApiError> {
        self.enter(FakeCall::UpcomingRelease).await?;
        Ok(self.upcoming())
    }

    async fn release(&self, name: &str) -> Result<Release, ApiError> {
        self.enter(FakeCall::Release).await?;
        let state = self.state.borrow();
        state
            .releases
            .iter()
            .chain(std::iter::once(&state.upcoming))
            .find(|r| r.name == name)
            .cloned()
            .ok_or_else(|| ApiError::Server {
                status: 404,
                message: format!("No release named {name}"),
            })
    }

    async fn perform_release(&self, next_name: &str) -> Result<(), ApiError> {
        self.enter(FakeCall::PerformRelease).await?;
        let mut state = self.state.borrow_mut();
        let previous = std::mem::take(&mut state.upcoming);
        state.upcoming = Release {
            name: next_name.to_string(),
            created: previous.last_update,
            last_update: previous.last_update,
            ..Default::default()
        };
        state.releases.push(previous);
        Ok(())
    }

    async fn systems(&self) -> Result<SystemsStatus, ApiError> {
        self.enter(FakeCall::Systems).await?;
        Ok(self.systems_state())
    }

    async fn set_submissions_active(&self, active: bool) -> Result<(), ApiError> {
        self.enter(FakeCall::SetSubmissionsActive(active)).await?;
        self.state.borrow_mut().systems.is_release_locked = !active;
        Ok(())
    }

    async fn validation_queue(&self) -> Result<Vec<String>, ApiError> {
        self.enter(FakeCall::ValidationQueue).await?;
        let scripted = self.state.borrow_mut().scripted_queue.pop_front();
        match scripted {
            Some(answer) => answer.await.unwrap_or_else(|_| {
                Err(ApiError::InvalidRequest("scripted answer dropped".to_string()))
            }),
            None => Ok(self.queue()),
        }
    }

    async fn clear_validation_queue(&self) -> Result<(), ApiError> {
        self.enter(FakeCall::ClearValidationQueue).await?;
        self.state.borrow_mut().queue.clear();
        Ok(())
    }
}

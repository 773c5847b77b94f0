use super::{Generations, InFlight};
use crate::client::AdminApi;
use crate::error::ApiError;
use crate::models::Release;
use std::rc::Rc;
use tokio::sync::watch;
use tracing::{debug, info};

/// Which release to load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseTarget {
    /// The release currently open for submissions
    Upcoming,
    Named(String),
}

/// The release shown at the top of the dashboard.
///
/// Holds `None` until the first successful fetch.
pub struct ReleaseViewModel<A: AdminApi> {
    api: Rc<A>,
    state: watch::Sender<Option<Release>>,
    generations: Generations,
    releasing: InFlight,
}

impl<A: AdminApi> ReleaseViewModel<A> {
    pub fn new(api: Rc<A>) -> Self {
        Self {
            api,
            state: watch::Sender::new(None),
            generations: Generations::default(),
            releasing: InFlight::default(),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Release>> {
        self.state.subscribe()
    }

    pub fn current(&self) -> Option<Release> {
        self.state.borrow().clone()
    }

    pub fn is_releasing(&self) -> bool {
        self.releasing.is_busy()
    }

    /// Load `target` and replace the current release with it.
    ///
    /// On error the current release is left as it was. Fails with
    /// [`ApiError::Superseded`] when a newer fetch settled first.
    pub async fn fetch(&self, target: ReleaseTarget) -> Result<(), ApiError> {
        let generation = self.generations.issue();
        let outcome = match &target {
            ReleaseTarget::Upcoming => self.api.upcoming_release().await,
            ReleaseTarget::Named(name) => self.api.release(name).await,
        };
        let release = match self.generations.settle(generation, outcome) {
            Err(ApiError::Superseded) => {
                debug!("Dropping stale release response for {:?}", target);
                return Err(ApiError::Superseded);
            }
            other => other?,
        };

        debug!("Release {} loaded", release.name);
        self.state.send_replace(Some(release));
        Ok(())
    }

    /// Close the upcoming release and open `next_name` in its place.
    ///
    /// Does not refresh; callers fetch [`ReleaseTarget::Upcoming`] afterwards.
    pub async fn perform_release(&self, next_name: &str) -> Result<(), ApiError> {
        let next_name = next_name.trim();
        if next_name.is_empty() {
            return Err(ApiError::InvalidRequest(
                "A name for the next release is required".to_string(),
            ));
        }

        let _token = self.releasing.enter()?;
        info!("Performing release, next release will be {}", next_name);
        self.api.perform_release(next_name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{FakeAdminApi, FakeCall};
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use tokio::sync::oneshot;

    fn release(name: &str, created: i64, last_update: i64) -> Release {
        Release {
            name: name.to_string(),
            created: Some(created),
            last_update: Some(last_update),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_fetch_replaces_all_fields() {
        let api = Rc::new(FakeAdminApi::new());
        api.set_upcoming(release("ICGC22", 100, 200));
        let vm = ReleaseViewModel::new(api.clone());
        let mut rx = vm.subscribe();

        vm.fetch(ReleaseTarget::Upcoming).await.unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(
            *rx.borrow_and_update(),
            Some(release("ICGC22", 100, 200))
        );

        api.set_upcoming(release("ICGC23", 300, 400));
        vm.fetch(ReleaseTarget::Upcoming).await.unwrap();
        assert_eq!(vm.current(), Some(release("ICGC23", 300, 400)));
    }

    #[tokio::test]
    async fn test_fetch_named_release() {
        let api = Rc::new(FakeAdminApi::new());
        api.add_release(release("ICGC21", 1, 2));
        let vm = ReleaseViewModel::new(api.clone());

        vm.fetch(ReleaseTarget::Named("ICGC21".into())).await.unwrap();
        assert_eq!(vm.current().map(|r| r.name), Some("ICGC21".to_string()));
        assert_eq!(api.calls(), vec![FakeCall::Release]);
    }

    #[tokio::test]
    async fn test_fetch_failure_keeps_previous_release() {
        let api = Rc::new(FakeAdminApi::new());
        api.set_upcoming(release("ICGC22", 100, 200));
        let vm = ReleaseViewModel::new(api.clone());
        vm.fetch(ReleaseTarget::Upcoming).await.unwrap();

        api.fail(FakeCall::UpcomingRelease, "Service unavailable");
        let err = vm.fetch(ReleaseTarget::Upcoming).await.unwrap_err();
        assert_eq!(err.to_string(), "Service unavailable");
        assert_eq!(vm.current(), Some(release("ICGC22", 100, 200)));
    }

    #[tokio::test]
    async fn test_perform_release_does_not_refresh() {
        let api = Rc::new(FakeAdminApi::new());
        api.set_upcoming(release("ICGC22", 100, 200));
        let vm = ReleaseViewModel::new(api.clone());
        vm.fetch(ReleaseTarget::Upcoming).await.unwrap();

        vm.perform_release("ICGC23").await.unwrap();
        assert_eq!(vm.current().map(|r| r.name), Some("ICGC22".to_string()));
        assert_eq!(api.upcoming().name, "ICGC23");
        assert!(!vm.is_releasing());
    }

    #[tokio::test]
    async fn test_perform_release_requires_name() {
        let api = Rc::new(FakeAdminApi::new());
        let vm = ReleaseViewModel::new(api.clone());
        let err = vm.perform_release("   ").await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidRequest(_)));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_perform_release_failure_propagates() {
        let api = Rc::new(FakeAdminApi::new());
        api.fail(FakeCall::PerformRelease, "RELEASE_EXCEPTION");
        let vm = ReleaseViewModel::new(api.clone());
        let err = vm.perform_release("ICGC23").await.unwrap_err();
        assert_eq!(err.to_string(), "RELEASE_EXCEPTION");
        assert!(!vm.is_releasing());
    }

    /// Answers each `upcoming_release` call with the next queued oneshot.
    struct GatedApi {
        responses: RefCell<VecDeque<oneshot::Receiver<Release>>>,
    }

    #[async_trait(?Send)]
    impl AdminApi for GatedApi {
        async fn upcoming_release(&self) -> Result<Release, ApiError> {
            let rx = self
                .responses
                .borrow_mut()
                .pop_front()
                .expect("unexpected fetch");
            Ok(rx.await.expect("sender dropped"))
        }
        async fn release(&self, _name: &str) -> Result<Release, ApiError> {
            unimplemented!()
        }
        async fn perform_release(&self, _next_name: &str) -> Result<(), ApiError> {
            unimplemented!()
        }
        async fn systems(&self) -> Result<crate::models::SystemsStatus, ApiError> {
            unimplemented!()
        }
        async fn set_submissions_active(&self, _active: bool) -> Result<(), ApiError> {
            unimplemented!()
        }
        async fn validation_queue(&self) -> Result<Vec<String>, ApiError> {
            unimplemented!()
        }
        async fn clear_validation_queue(&self) -> Result<(), ApiError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn test_stale_response_does_not_overwrite_newer() {
        let (first_tx, first_rx) = oneshot::channel();
        let (second_tx, second_rx) = oneshot::channel();
        let api = Rc::new(GatedApi {
            responses: RefCell::new(VecDeque::from([first_rx, second_rx])),
        });
        let vm = ReleaseViewModel::new(api);

        let respond = async {
            second_tx.send(release("newer", 3, 4)).unwrap();
            tokio::task::yield_now().await;
            first_tx.send(release("older", 1, 2)).unwrap();
        };

        let (first, second, _) = futures::join!(
            vm.fetch(ReleaseTarget::Upcoming),
            vm.fetch(ReleaseTarget::Upcoming),
            respond
        );
        assert!(matches!(first, Err(ApiError::Superseded)));
        second.unwrap();

        assert_eq!(vm.current().map(|r| r.name), Some("newer".to_string()));
    }
}

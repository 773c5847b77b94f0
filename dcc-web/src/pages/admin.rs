use crate::admin_service::use_admin;
use crate::Route;
use chrono::Utc;
use dcc_ui::stores::SessionStateStoreExt;
use dcc_ui::AdminView;
use dioxus::prelude::*;
use std::time::Duration;

/// How often relative timestamps are re-rendered
const CLOCK_TICK: Duration = Duration::from_secs(30);

/// Admin dashboard page
///
/// Loads all sections on mount; sends the user to the login page whenever
/// the session is (or becomes) unauthenticated.
#[component]
pub fn Admin() -> Element {
    let service = use_admin();
    let session = service.session;

    use_effect(move || {
        if !*session.authenticated().read() {
            navigator().replace(Route::Login {});
        }
    });

    use_hook({
        let service = service.clone();
        move || {
            if *session.authenticated().peek() {
                service.load();
            }
        }
    });

    let mut now = use_signal(Utc::now);
    use_future(move || async move {
        loop {
            sleep(CLOCK_TICK).await;
            now.set(Utc::now());
        }
    });

    let lock_service = service.clone();
    let release_service = service.clone();
    let queue_service = service.clone();

    rsx! {
        AdminView {
            state: service.state,
            now: now(),
            on_toggle_lock: move |_| lock_service.toggle_lock(),
            on_perform_release: move |next_name: String| release_service.perform_release(next_name),
            on_clear_queue: move |_| queue_service.clear_queue(),
        }
    }
}

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

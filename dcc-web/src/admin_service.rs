//! AdminService - owns the dashboard's reactive state and the controller
//!
//! AdminService owns the `Store<AdminState>` and is responsible for:
//! - Mirroring the controller's watch snapshots into the Store
//! - Converting server models to display types
//! - Spawning controller actions for button clicks
//! - Holding the credential token and persisting it across reloads
//!
//! Pages access it via `use_admin()`.

use crate::display::{load_error_message, release_info, sftp_sessions};
use crate::storage;
use dcc_core::config::Config;
use dcc_core::{basic_token, AdminController, ApiError, SharedCredentials, SubmissionClient};
use dcc_ui::stores::{AdminState, AdminStateStoreExt, SessionState, SessionStateStoreExt};
use dioxus::prelude::*;
use std::rc::Rc;
use tracing::{info, warn};

const SESSION_EXPIRED_NOTICE: &str = "Your session has expired. Please log in again.";

#[derive(Clone)]
pub struct AdminService {
    /// Dashboard state (Store for fine-grained reactivity)
    pub state: Store<AdminState>,
    /// Login state shared by the layout and the login page
    pub session: Store<SessionState>,
    credentials: SharedCredentials,
    controller: Rc<AdminController<SubmissionClient>>,
}

impl PartialEq for AdminService {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.controller, &other.controller)
    }
}

impl AdminService {
    /// Build the service against the API base the page was served with.
    ///
    /// Restores a token saved by an earlier login.
    pub fn from_environment() -> Result<Self, String> {
        let config = web_config().map_err(|e| e.to_string())?;
        info!("Submission server API at {}", config.api_url);

        let credentials = SharedCredentials::new();
        let user_name = storage::get_string(storage::USER_KEY);
        if let Some(token) = storage::get_string(storage::TOKEN_KEY) {
            credentials.set_token(token);
        }

        let client =
            SubmissionClient::new(config, credentials.clone()).map_err(|e| e.to_string())?;

        Ok(Self {
            state: Store::new(AdminState::default()),
            session: Store::new(SessionState {
                authenticated: credentials.is_authenticated(),
                user_name,
                notice: None,
            }),
            credentials,
            controller: Rc::new(AdminController::new(client)),
        })
    }

    /// Start mirroring controller snapshots. Call once per service.
    pub fn start_subscriptions(&self) {
        self.subscribe_release();
        self.subscribe_systems();
        self.subscribe_validation_queue();
        self.subscribe_ui_state();
    }

    fn subscribe_release(&self) {
        let state = self.state;
        let mut rx = self.controller.release.subscribe();

        spawn(async move {
            loop {
                let release = (*rx.borrow_and_update()).as_ref().map(release_info);
                state.release().set(release);
                if rx.changed().await.is_err() {
                    break;
                }
            }
        });
    }

    fn subscribe_systems(&self) {
        let state = self.state;
        let mut rx = self.controller.systems.subscribe();

        spawn(async move {
            loop {
                let (locked, active, sessions) = {
                    let status = rx.borrow_and_update();
                    (
                        status.is_release_locked,
                        status.active_sftp_sessions,
                        sftp_sessions(&status),
                    )
                };
                state.is_release_locked().set(locked);
                state.active_sftp_sessions().set(active);
                state.sftp_sessions().set(sessions);
                if rx.changed().await.is_err() {
                    break;
                }
            }
        });
    }

    fn subscribe_validation_queue(&self) {
        let state = self.state;
        let mut rx = self.controller.queue.subscribe();

        spawn(async move {
            loop {
                let queue = rx.borrow_and_update().clone();
                state.validation_queue().set(queue);
                if rx.changed().await.is_err() {
                    break;
                }
            }
        });
    }

    fn subscribe_ui_state(&self) {
        let service = self.clone();
        let mut rx = self.controller.subscribe_ui();

        spawn(async move {
            loop {
                let ui = rx.borrow_and_update().clone();
                let state = service.state;
                state.lock_status().set(ui.lock);
                state.release_status().set(ui.release);
                state.clear_queue_status().set(ui.clear_queue);
                state
                    .load_errors()
                    .set(ui.load_errors.iter().map(load_error_message).collect());

                if ui.session_expired {
                    warn!("Server rejected the stored credentials");
                    service.controller.clear_session_expired();
                    service.logout(Some(SESSION_EXPIRED_NOTICE.to_string()));
                }

                if rx.changed().await.is_err() {
                    break;
                }
            }
        });
    }

    /// Fetch everything the dashboard shows.
    pub fn load(&self) {
        let controller = self.controller.clone();
        spawn(async move {
            controller.load().await;
        });
    }

    pub fn toggle_lock(&self) {
        let controller = self.controller.clone();
        spawn(async move {
            report("Lock/unlock", controller.toggle_lock().await);
        });
    }

    pub fn perform_release(&self, next_name: String) {
        let controller = self.controller.clone();
        spawn(async move {
            report("Release", controller.perform_release(&next_name).await);
        });
    }

    pub fn clear_queue(&self) {
        let controller = self.controller.clone();
        spawn(async move {
            report("Clear queue", controller.clear_queue().await);
        });
    }

    /// Store the Basic token for `username` and remember it across reloads.
    pub fn login(&self, username: &str, password: &str) {
        let token = basic_token(username, password);
        storage::set_string(storage::TOKEN_KEY, &token);
        storage::set_string(storage::USER_KEY, username);
        self.credentials.set_token(token);

        info!("Logged in as {}", username);
        let mut session = self.session;
        session.set(SessionState {
            authenticated: true,
            user_name: Some(username.to_string()),
            notice: None,
        });
    }

    /// Drop the token. `notice` explains an involuntary logout on the login page.
    pub fn logout(&self, notice: Option<String>) {
        storage::remove(storage::TOKEN_KEY);
        storage::remove(storage::USER_KEY);
        self.credentials.clear();

        let mut session = self.session;
        session.set(SessionState {
            authenticated: false,
            user_name: None,
            notice,
        });
    }
}

/// Failures already sit in the action's status; only in-flight rejections
/// are worth a separate note.
fn report(action: &str, result: Result<(), ApiError>) {
    if let Err(ApiError::InFlight) = result {
        info!("{} ignored, previous request still running", action);
    }
}

/// `DCC_API_URL` is fixed at build time in the browser. A relative base is
/// resolved against the page's origin.
fn web_config() -> Result<Config, dcc_core::config::ConfigError> {
    let config = Config::from_lookup(|key| match key {
        "DCC_API_URL" => option_env!("DCC_API_URL").map(str::to_string),
        _ => None,
    })?;

    if !config.api_url.starts_with('/') {
        return Ok(config);
    }
    let origin = web_sys::window().and_then(|w| w.location().origin().ok());
    Ok(match origin {
        Some(origin) => {
            let api_url = format!("{}{}", origin, config.api_url);
            config.with_api_url(api_url)
        }
        None => config,
    })
}

pub fn use_admin() -> AdminService {
    use_context::<AdminService>()
}

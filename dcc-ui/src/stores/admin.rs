//! Admin dashboard state store

use crate::display_types::{ReleaseInfo, SftpSession};
use dcc_common::ActionStatus;
use dioxus::prelude::*;

/// State for the admin dashboard
///
/// Written by the admin page whenever one of the controller's snapshots
/// changes; the view only reads it.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AdminState {
    /// Upcoming release, `None` until the first fetch succeeds
    pub release: Option<ReleaseInfo>,
    pub is_release_locked: bool,
    pub active_sftp_sessions: u32,
    pub sftp_sessions: Vec<SftpSession>,
    /// Project keys in queue order
    pub validation_queue: Vec<String>,
    pub lock_status: ActionStatus,
    pub release_status: ActionStatus,
    pub clear_queue_status: ActionStatus,
    /// One message per section whose last fetch failed
    pub load_errors: Vec<String>,
}

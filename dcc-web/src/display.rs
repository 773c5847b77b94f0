//! Conversions from server models to display types

use dcc_core::{LoadError, Release, SystemsStatus};
use dcc_ui::display_types::{from_epoch_millis, ReleaseInfo, SftpSession};

pub fn release_info(release: &Release) -> ReleaseInfo {
    ReleaseInfo {
        name: release.name.clone(),
        created: from_epoch_millis(release.created),
        last_update: from_epoch_millis(release.last_update),
        state: release.state.clone(),
    }
}

pub fn sftp_sessions(status: &SystemsStatus) -> Vec<SftpSession> {
    status
        .user_sessions
        .iter()
        .map(|session| SftpSession {
            user_name: session.user_name.clone(),
            file_transfer: session.file_transfer().map(str::to_string),
        })
        .collect()
}

pub fn load_error_message(error: &LoadError) -> String {
    format!("Could not load {}: {}", error.section, error.message)
}

//! Display types for UI components
//!
//! Lightweight versions of the server's wire models holding only what the
//! views render.

use chrono::{DateTime, Utc};

/// The release shown in the dashboard header
#[derive(Clone, Debug, PartialEq)]
pub struct ReleaseInfo {
    pub name: String,
    pub created: Option<DateTime<Utc>>,
    pub last_update: Option<DateTime<Utc>>,
    /// Server-side release state, e.g. `OPENED`
    pub state: Option<String>,
}

/// One connected SFTP user
#[derive(Clone, Debug, PartialEq)]
pub struct SftpSession {
    pub user_name: String,
    /// File being transferred right now; `None` when idle
    pub file_transfer: Option<String>,
}

/// Convert epoch milliseconds as sent by the server.
pub fn from_epoch_millis(millis: Option<i64>) -> Option<DateTime<Utc>> {
    millis.and_then(DateTime::from_timestamp_millis)
}

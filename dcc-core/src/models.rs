//! Wire types for the submission server's web services.

use serde::{Deserialize, Serialize};

/// A release as reported by `/nextRelease` or `/releases/{name}`.
///
/// Timestamps are epoch milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Release {
    pub name: String,
    #[serde(default)]
    pub created: Option<i64>,
    #[serde(default)]
    pub last_update: Option<i64>,
    /// `OPENED`, `COMPLETED`, ... Display only.
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub dictionary_version: Option<String>,
}

/// What the user's SFTP session is currently doing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IoSessionMap {
    #[serde(default)]
    pub file_transfer: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    pub user_name: String,
    #[serde(default)]
    pub io_session_map: Option<IoSessionMap>,
}

impl UserSession {
    /// File currently being transferred, if any
    pub fn file_transfer(&self) -> Option<&str> {
        self.io_session_map
            .as_ref()
            .and_then(|m| m.file_transfer.as_deref())
            .filter(|f| !f.is_empty())
    }
}

/// Submission-system status from `/systems`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "SystemsStatusWire")]
pub struct SystemsStatus {
    /// Non-admin accounts may not upload or validate while locked
    pub is_release_locked: bool,
    pub active_sftp_sessions: u32,
    pub user_sessions: Vec<UserSession>,
}

/// Accepts both the dashboard shape (`isReleaseLocked`) and the server's
/// native one (`active`, where an inactive system means locked submissions).
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SystemsStatusWire {
    #[serde(default)]
    is_release_locked: Option<bool>,
    #[serde(default)]
    active: Option<bool>,
    #[serde(default)]
    active_sftp_sessions: Option<u32>,
    #[serde(default)]
    user_sessions: Option<Vec<UserSession>>,
}

impl From<SystemsStatusWire> for SystemsStatus {
    fn from(wire: SystemsStatusWire) -> Self {
        let is_release_locked = wire
            .is_release_locked
            .or(wire.active.map(|active| !active))
            .unwrap_or(false);

        SystemsStatus {
            is_release_locked,
            active_sftp_sessions: wire.active_sftp_sessions.unwrap_or(0),
            user_sessions: wire.user_sessions.unwrap_or_default(),
        }
    }
}

/// Body of `POST /nextRelease`: the name the new upcoming release will get.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextReleaseRequest<'a> {
    pub name: &'a str,
}

/// Body of `PATCH /systems`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SystemsPatch {
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_release() {
        let json = r#"{
            "name": "ICGC22",
            "created": 1475000000000,
            "lastUpdate": 1476000000000,
            "state": "OPENED",
            "dictionaryVersion": "0.13a",
            "submissions": []
        }"#;
        let release: Release = serde_json::from_str(json).unwrap();
        assert_eq!(release.name, "ICGC22");
        assert_eq!(release.created, Some(1475000000000));
        assert_eq!(release.last_update, Some(1476000000000));
        assert_eq!(release.state.as_deref(), Some("OPENED"));
        assert_eq!(release.dictionary_version.as_deref(), Some("0.13a"));
    }

    #[test]
    fn parse_release_without_timestamps() {
        let release: Release = serde_json::from_str(r#"{"name":"release1"}"#).unwrap();
        assert_eq!(release.created, None);
        assert_eq!(release.last_update, None);
    }

    #[test]
    fn parse_systems_dashboard_shape() {
        let json = r#"{
            "isReleaseLocked": true,
            "activeSftpSessions": 2,
            "userSessions": [
                {"userName": "alice", "ioSessionMap": {"fileTransfer": "donor.txt"}},
                {"userName": "bob", "ioSessionMap": {}},
                {"userName": "carol"}
            ]
        }"#;
        let status: SystemsStatus = serde_json::from_str(json).unwrap();
        assert!(status.is_release_locked);
        assert_eq!(status.active_sftp_sessions, 2);
        assert_eq!(status.user_sessions.len(), 3);
        assert_eq!(status.user_sessions[0].file_transfer(), Some("donor.txt"));
        assert_eq!(status.user_sessions[1].file_transfer(), None);
        assert_eq!(status.user_sessions[2].file_transfer(), None);
    }

    #[test]
    fn parse_systems_native_active_flag() {
        let locked: SystemsStatus =
            serde_json::from_str(r#"{"active": false, "activeSftpSessions": 0}"#).unwrap();
        assert!(locked.is_release_locked);

        let open: SystemsStatus = serde_json::from_str(r#"{"active": true}"#).unwrap();
        assert!(!open.is_release_locked);
    }

    #[test]
    fn parse_systems_empty_object_defaults() {
        let status: SystemsStatus = serde_json::from_str("{}").unwrap();
        assert_eq!(status, SystemsStatus::default());
    }

    #[test]
    fn serialize_request_bodies() {
        let body = serde_json::to_value(NextReleaseRequest { name: "ICGC23" }).unwrap();
        assert_eq!(body, serde_json::json!({"name": "ICGC23"}));

        let patch = serde_json::to_value(SystemsPatch { active: false }).unwrap();
        assert_eq!(patch, serde_json::json!({"active": false}));
    }
}

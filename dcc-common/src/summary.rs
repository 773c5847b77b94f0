//! Fixed dashboard wording that depends on state

/// "There is 1 active SFTP session", "There are 3 active SFTP sessions"
pub fn sftp_sessions_summary(count: u32) -> String {
    if count == 1 {
        "There is 1 active SFTP session".to_string()
    } else {
        format!("There are {count} active SFTP sessions")
    }
}

/// Explains what the lock button will do in the current state.
pub fn lock_hint(is_release_locked: bool) -> &'static str {
    if is_release_locked {
        "Click on \"Unlock Submissions\" to allow uploading and validation on non-admin accounts."
    } else {
        "Click on \"Lock Submissions\" to prevent uploading and validation on non-admin accounts."
    }
}

pub fn lock_button_label(is_release_locked: bool) -> &'static str {
    if is_release_locked {
        "Unlock"
    } else {
        "Lock"
    }
}

//! Plain-text rendering of the dashboard state

use dcc_common::{format_relative_time, sftp_sessions_summary};
use dcc_core::{Release, SystemsStatus};

fn since(then: Option<i64>, now_ms: i64) -> String {
    then.map(|t| format_relative_time(now_ms - t))
        .unwrap_or_else(|| "unknown".to_string())
}

pub fn release(release: Option<&Release>, now_ms: i64) -> String {
    let Some(release) = release else {
        return "Upcoming release: unavailable".to_string();
    };
    let mut out = format!("Upcoming release: {}", release.name);
    if let Some(state) = &release.state {
        out.push_str(&format!(" ({state})"));
    }
    out.push_str(&format!(
        "\n  Created       {}\n  Last Updated  {}",
        since(release.created, now_ms),
        since(release.last_update, now_ms)
    ));
    out
}

pub fn systems(status: &SystemsStatus) -> String {
    let mut out = format!(
        "Submissions: {}\n{}",
        if status.is_release_locked { "locked" } else { "unlocked" },
        sftp_sessions_summary(status.active_sftp_sessions)
    );
    for session in &status.user_sessions {
        out.push_str(&format!(
            "\n  {:<20} {}",
            session.user_name,
            session.file_transfer().unwrap_or("idle")
        ));
    }
    out
}

pub fn queue(queue: &[String]) -> String {
    if queue.is_empty() {
        "Validation queue is empty".to_string()
    } else {
        format!("Validation queue: {}", queue.join(", "))
    }
}

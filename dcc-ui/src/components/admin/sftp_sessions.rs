use crate::components::data_table::DataTable;
use crate::display_types::SftpSession;
use dcc_common::sftp_sessions_summary;
use dioxus::prelude::*;

/// Active SFTP session count and what each connected user is transferring
#[component]
pub fn SftpSessionsView(active_sftp_sessions: u32, sessions: Vec<SftpSession>) -> Element {
    let summary = sftp_sessions_summary(active_sftp_sessions);
    let rows: Vec<Vec<String>> = sessions
        .iter()
        .map(|session| {
            vec![
                session.user_name.clone(),
                session
                    .file_transfer
                    .clone()
                    .unwrap_or_else(|| "idle".to_string()),
            ]
        })
        .collect();

    rsx! {
        section { class: "mb-6",
            h2 { class: "text-xl font-semibold mb-2", "SFTP" }
            p { class: "mb-2", "{summary}" }
            if !rows.is_empty() {
                DataTable { columns: vec!["User", "Transfer"], rows }
            }
        }
    }
}

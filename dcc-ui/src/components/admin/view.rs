//! Admin dashboard view - pure rendering, no data fetching
//!
//! Accepts `ReadStore<AdminState>`; every request goes back to the page
//! through the callbacks.

use super::{ReleaseHeaderView, SftpSessionsView, ValidationQueueView};
use crate::components::helpers::ErrorDisplay;
use crate::components::icons::{LockIcon, RocketIcon, UnlockIcon};
use crate::components::text_input::TextInput;
use crate::components::utils::is_next_name_released;
use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::stores::admin::{AdminState, AdminStateStoreExt};
use chrono::{DateTime, Utc};
use dcc_common::{lock_button_label, lock_hint, suggest_next_release_name};
use dioxus::prelude::*;

#[component]
pub fn AdminView(
    state: ReadStore<AdminState>,
    /// Reference point for "3 days ago" style timestamps
    now: DateTime<Utc>,
    on_toggle_lock: EventHandler<()>,
    /// Called with the name the next release should get
    on_perform_release: EventHandler<String>,
    on_clear_queue: EventHandler<()>,
) -> Element {
    let release = state.release().read().clone();
    let is_release_locked = *state.is_release_locked().read();
    let lock_status = state.lock_status().read().clone();
    let release_status = state.release_status().read().clone();
    let clear_queue_status = state.clear_queue_status().read().clone();
    let load_errors = state.load_errors().read().clone();

    let release_loading = release.is_none() && load_errors.is_empty();

    let mut next_name = use_signal(String::new);

    // A failed or rejected release keeps the typed name for another try.
    use_effect(move || {
        let upcoming = state.release().read().as_ref().map(|r| r.name.clone());
        if is_next_name_released(&next_name.peek(), upcoming.as_deref()) {
            next_name.set(String::new());
        }
    });

    let suggestion = release
        .as_ref()
        .and_then(|r| suggest_next_release_name(&r.name));

    let placeholder = suggestion
        .clone()
        .unwrap_or_else(|| "Next release name".to_string());

    let action_errors: Vec<String> = [lock_status.error(), release_status.error()]
        .into_iter()
        .flatten()
        .map(str::to_string)
        .collect();

    let lock_variant = if is_release_locked {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Danger
    };

    rsx! {
        div { class: "Admin container mx-auto py-6",
            h1 { class: "text-3xl font-bold mb-4", "Admin" }

            ErrorDisplay { messages: load_errors }
            ReleaseHeaderView { release, now, loading: release_loading }

            div { class: "mb-2",
                ErrorDisplay { messages: action_errors }
                div { class: "text-sm", "{lock_hint(is_release_locked)}" }
            }

            div { class: "flex flex-wrap items-center gap-3 mb-6",
                Button {
                    variant: lock_variant,
                    size: ButtonSize::Medium,
                    r#type: "submit",
                    loading: lock_status.is_pending(),
                    onclick: move |_| on_toggle_lock.call(()),
                    if is_release_locked {
                        UnlockIcon {}
                    } else {
                        LockIcon {}
                    }
                    "{lock_button_label(is_release_locked)}"
                }

                div { class: "w-48",
                    TextInput {
                        value: next_name(),
                        on_input: move |value| next_name.set(value),
                        placeholder,
                        disabled: release_status.is_pending(),
                    }
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    size: ButtonSize::Medium,
                    class: Some("release-now-btn".to_string()),
                    loading: release_status.is_pending(),
                    onclick: move |_| {
                        let typed = next_name.read().trim().to_string();
                        let name = if typed.is_empty() {
                            suggestion.clone().unwrap_or_default()
                        } else {
                            typed
                        };
                        on_perform_release.call(name);
                    },
                    RocketIcon {}
                    "Release Now"
                }
            }

            ValidationQueueView {
                queue: state.validation_queue().read().clone(),
                clearing: clear_queue_status.is_pending(),
                on_clear_queue,
            }
            if let Some(error) = clear_queue_status.error() {
                ErrorDisplay { messages: vec![error.to_string()] }
            }

            SftpSessionsView {
                active_sftp_sessions: *state.active_sftp_sessions().read(),
                sessions: state.sftp_sessions().read().clone(),
            }
        }
    }
}

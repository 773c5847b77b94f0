//! Error display component

use crate::components::icons::AlertTriangleIcon;
use dioxus::prelude::*;

/// Alert box listing one or more error messages
///
/// Renders nothing when `messages` is empty.
#[component]
pub fn ErrorDisplay(messages: Vec<String>) -> Element {
    if messages.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "flex gap-2 bg-red-50 border border-red-300 text-red-800 px-4 py-3 rounded mb-4",
            role: "alert",
            AlertTriangleIcon { class: "w-5 h-5 flex-shrink-0" }
            div {
                for message in messages {
                    p { "{message}" }
                }
            }
        }
    }
}

//! Page chrome shared by every route

use crate::components::icons::LogOutIcon;
use crate::components::ChromelessButton;
use dioxus::prelude::*;

/// Top bar with the signed-in user and a log-out control, then the page
#[component]
pub fn AppLayoutView(
    user_name: Option<String>,
    on_logout: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        div { class: "min-h-screen bg-gray-50 text-gray-900",
            nav { class: "flex items-center justify-between px-6 py-3 bg-gray-800 text-white",
                span { class: "font-semibold", "ICGC DCC Submission" }
                if let Some(user_name) = user_name {
                    div { class: "flex items-center gap-3 text-sm",
                        span { "{user_name}" }
                        ChromelessButton {
                            class: Some("inline-flex items-center gap-1 hover:text-gray-300".to_string()),
                            title: Some("Log out".to_string()),
                            onclick: move |_| on_logout.call(()),
                            LogOutIcon {}
                            "Log out"
                        }
                    }
                }
            }
            main { class: "px-6", {children} }
        }
    }
}

use crate::components::helpers::LoadingSpinner;
use crate::components::utils::format_since;
use crate::display_types::ReleaseInfo;
use chrono::{DateTime, Utc};
use dioxus::prelude::*;

/// "Upcoming Release - NAME" with its created and last-updated times
///
/// `loading` shows a spinner while no release has been fetched yet.
#[component]
pub fn ReleaseHeaderView(
    release: Option<ReleaseInfo>,
    now: DateTime<Utc>,
    #[props(default)] loading: bool,
) -> Element {
    let Some(release) = release else {
        return rsx! {
            header { class: "mb-4",
                h2 { class: "text-xl font-semibold", "Upcoming Release" }
                if loading {
                    LoadingSpinner { message: "Loading release...".to_string() }
                }
            }
        };
    };

    let created = format_since(release.created, now);
    let last_update = format_since(release.last_update, now);

    rsx! {
        header { class: "mb-4",
            h2 { class: "text-xl font-semibold",
                "Upcoming Release - "
                span { class: "release-name", "{release.name}" }
                if let Some(state) = &release.state {
                    span { class: "ml-2 px-2 py-0.5 text-xs bg-gray-200 text-gray-700 rounded",
                        "{state}"
                    }
                }
            }
            ul { class: "terms flex gap-6 text-sm mt-1",
                li {
                    span { class: "terms__term text-gray-500 mr-1", "Created" }
                    span { class: "terms__value", "{created}" }
                }
                li {
                    span { class: "terms__term text-gray-500 mr-1", "Last Updated" }
                    span { class: "terms__value", "{last_update}" }
                }
            }
        }
    }
}

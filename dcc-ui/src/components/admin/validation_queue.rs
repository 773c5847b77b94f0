use crate::components::icons::TrashIcon;
use crate::components::{Button, ButtonSize, ButtonVariant};
use dioxus::prelude::*;

/// Queued project keys and the "Clear Queue" control
#[component]
pub fn ValidationQueueView(
    queue: Vec<String>,
    clearing: bool,
    on_clear_queue: EventHandler<()>,
) -> Element {
    let is_empty = queue.is_empty();

    rsx! {
        section { class: "mb-6",
            h2 { class: "text-xl font-semibold mb-2", "Validation" }
            if is_empty {
                div { class: "text-gray-500 mb-2", "Validation queue is empty" }
            } else {
                ul { class: "flex flex-wrap gap-2 mb-2",
                    for project_key in queue {
                        li { key: "{project_key}",
                            span { class: "px-2 py-0.5 text-xs bg-gray-600 text-white rounded",
                                "{project_key}"
                            }
                        }
                    }
                }
            }
            Button {
                variant: ButtonVariant::Danger,
                size: ButtonSize::Small,
                disabled: is_empty,
                loading: clearing,
                onclick: move |_| on_clear_queue.call(()),
                TrashIcon {}
                "Clear Queue"
            }
        }
    }
}

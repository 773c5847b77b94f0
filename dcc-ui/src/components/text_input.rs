//! Reusable text input component

use dioxus::prelude::*;

/// What the input holds; passwords are masked
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TextInputType {
    Text,
    Password,
}

impl TextInputType {
    fn as_str(self) -> &'static str {
        match self {
            TextInputType::Text => "text",
            TextInputType::Password => "password",
        }
    }
}

/// Reusable text input component with consistent styling
#[component]
pub fn TextInput(
    value: String,
    on_input: EventHandler<String>,
    #[props(default = TextInputType::Text)] input_type: TextInputType,
    #[props(default)] placeholder: Option<String>,
    #[props(default)] disabled: bool,
    #[props(default)] id: Option<String>,
    #[props(default)] autofocus: bool,
) -> Element {
    let base = "w-full px-3 py-2 bg-white border border-gray-300 rounded focus:outline-none focus:ring-1 focus:ring-blue-500 text-gray-800 placeholder-gray-400";

    let disabled_class = if disabled {
        "opacity-50 cursor-not-allowed"
    } else {
        ""
    };

    let class = format!("{base} {disabled_class}");

    rsx! {
        input {
            r#type: input_type.as_str(),
            class: "{class}",
            id: id.as_deref(),
            value: "{value}",
            placeholder: placeholder.as_deref(),
            disabled,
            oninput: move |e| on_input.call(e.value()),
            onmounted: move |event| async move {
                if autofocus {
                    let _ = event.data().set_focus(true).await;
                }
            },
        }
    }
}

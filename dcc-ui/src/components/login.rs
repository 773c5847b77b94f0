//! Login form - collects credentials and hands them to the page

use crate::components::helpers::ErrorDisplay;
use crate::components::text_input::{TextInput, TextInputType};
use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::stores::session::{SessionState, SessionStateStoreExt};
use dioxus::prelude::*;

/// Pure view component for the login page
///
/// Calls `on_login` with `(username, password)`. Empty fields are rejected
/// here and never reach the page.
#[component]
pub fn LoginView(state: ReadStore<SessionState>, on_login: EventHandler<(String, String)>) -> Element {
    let notice = state.notice().read().clone();

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut validation = use_signal(|| None::<String>);

    let mut submit = move || {
        let user = username.read().trim().to_string();
        let pass = password.read().clone();
        if user.is_empty() || pass.is_empty() {
            validation.set(Some("Username and password are required".to_string()));
            return;
        }
        validation.set(None);
        password.set(String::new());
        on_login.call((user, pass));
    };

    let messages: Vec<String> = notice.into_iter().chain(validation()).collect();

    rsx! {
        div { class: "max-w-sm mx-auto py-16",
            h1 { class: "text-2xl font-bold mb-6", "DCC Submission Admin" }
            ErrorDisplay { messages }
            form {
                class: "flex flex-col gap-3",
                onsubmit: move |e| {
                    e.prevent_default();
                    submit();
                },
                TextInput {
                    value: username(),
                    on_input: move |value| username.set(value),
                    placeholder: "Username".to_string(),
                    autofocus: true,
                }
                TextInput {
                    value: password(),
                    on_input: move |value| password.set(value),
                    input_type: TextInputType::Password,
                    placeholder: "Password".to_string(),
                }
                Button {
                    variant: ButtonVariant::Primary,
                    size: ButtonSize::Medium,
                    r#type: "submit",
                    onclick: move |_| {},
                    "Log In"
                }
            }
        }
    }
}

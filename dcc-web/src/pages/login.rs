use crate::admin_service::use_admin;
use crate::Route;
use dcc_ui::LoginView;
use dioxus::prelude::*;

#[component]
pub fn Login() -> Element {
    let service = use_admin();
    let session = service.session;

    rsx! {
        LoginView {
            state: session,
            on_login: move |(username, password): (String, String)| {
                service.login(&username, &password);
                navigator().replace(Route::Admin {});
            },
        }
    }
}

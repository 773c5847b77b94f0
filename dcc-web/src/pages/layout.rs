use crate::admin_service::use_admin;
use crate::Route;
use dcc_ui::stores::SessionStateStoreExt;
use dcc_ui::AppLayoutView;
use dioxus::prelude::*;

#[component]
pub fn AppLayout() -> Element {
    let service = use_admin();
    let session = service.session;
    let user_name = if *session.authenticated().read() {
        session.user_name().read().clone()
    } else {
        None
    };

    rsx! {
        AppLayoutView {
            user_name,
            on_logout: move |_| {
                service.logout(None);
                navigator().replace(Route::Login {});
            },
            Outlet::<Route> {}
        }
    }
}

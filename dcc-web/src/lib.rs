pub mod admin_service;
mod display;
pub mod pages;
pub mod storage;

use admin_service::AdminService;
use dcc_ui::ErrorDisplay;
use dioxus::prelude::*;
use pages::{Admin, AppLayout, Login};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Admin {},
    #[end_layout]
    #[route("/login")]
    Login {},
}

#[component]
pub fn App() -> Element {
    let service = use_hook(AdminService::from_environment);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: TAILWIND_CDN }
        {
            match service {
                Ok(service) => rsx! {
                    ServiceRoot { service }
                },
                Err(message) => rsx! {
                    div { class: "p-6",
                        ErrorDisplay { messages: vec![format!("Cannot start the dashboard: {message}")] }
                    }
                },
            }
        }
    }
}

/// Provides the service to every route and starts its subscriptions once
#[component]
fn ServiceRoot(service: AdminService) -> Element {
    let service = use_context_provider(|| service);
    use_hook(|| service.start_subscriptions());

    rsx! {
        Router::<Route> {}
    }
}

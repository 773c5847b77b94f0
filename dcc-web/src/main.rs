//! dcc-web - browser entry point for the DCC submission admin dashboard

use dioxus::logger::tracing::Level;

fn main() {
    // A second subscriber only happens under hot reload; keep the first.
    let _ = dioxus::logger::init(Level::INFO);
    dioxus::launch(dcc_web::App);
}

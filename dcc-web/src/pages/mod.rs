mod admin;
mod layout;
mod login;

pub use admin::Admin;
pub use layout::AppLayout;
pub use login::Login;

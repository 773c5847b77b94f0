//! Login form state store

use dioxus::prelude::*;

#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct SessionState {
    /// Whether a credential token is held
    pub authenticated: bool,
    /// Name entered at the last successful login
    pub user_name: Option<String>,
    /// Why the user was sent back to the login page, if it wasn't by choice
    pub notice: Option<String>,
}

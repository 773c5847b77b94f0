//! dcc-core - client side of the DCC submission admin dashboard
//!
//! Talks to the submission server's REST API and keeps the dashboard's view
//! models. Has no UI dependency; `dcc-web` and `dcc-cli` both drive it.

pub mod client;
pub mod config;
pub mod controller;
pub mod credentials;
pub mod error;
pub mod headers;
pub mod models;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
pub mod view_models;

pub use client::{AdminApi, SubmissionClient};
pub use controller::{AdminController, AdminUiState, LoadError, Section};
pub use credentials::{basic_token, CredentialProvider, SharedCredentials};
pub use error::ApiError;
pub use headers::AuthHeaderProvider;
pub use models::{IoSessionMap, Release, SystemsStatus, UserSession};

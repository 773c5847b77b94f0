//! Credential token held on behalf of the logged-in operator.

use base64::Engine;
use std::fmt;
use std::sync::{Arc, RwLock};

/// Source of the current credential token.
///
/// Implementations return whatever token is current at the time of the call;
/// callers must not cache it.
pub trait CredentialProvider {
    fn token(&self) -> Option<String>;
}

/// Shared, mutable credential slot.
///
/// Cloning yields another handle to the same slot, so the login page and the
/// HTTP client observe the same token.
#[derive(Clone, Default)]
pub struct SharedCredentials {
    token: Arc<RwLock<Option<String>>>,
}

impl SharedCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        let credentials = Self::new();
        credentials.set_token(token);
        credentials
    }

    pub fn set_token(&self, token: impl Into<String>) {
        let mut slot = self.token.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(token.into());
    }

    pub fn clear(&self) {
        let mut slot = self.token.write().unwrap_or_else(|e| e.into_inner());
        *slot = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

impl CredentialProvider for SharedCredentials {
    fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl fmt::Debug for SharedCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedCredentials")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

/// Basic-auth token for a username/password pair: `base64("user:password")`.
pub fn basic_token(username: &str, password: &str) -> String {
    base64::engine::general_purpose::STANDARD.encode(format!("{username}:{password}"))
}

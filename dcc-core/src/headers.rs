use crate::credentials::CredentialProvider;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};

const JSON: &str = "application/json";

/// Projects the current credential token into request headers.
///
/// Every call to [`headers`](Self::headers) re-reads the token, so a login or
/// logout is picked up by the next request without any invalidation.
#[derive(Clone, Debug)]
pub struct AuthHeaderProvider<C> {
    credentials: C,
}

impl<C: CredentialProvider> AuthHeaderProvider<C> {
    pub fn new(credentials: C) -> Self {
        Self { credentials }
    }

    pub fn credentials(&self) -> &C {
        &self.credentials
    }

    /// `Authorization: Basic <token>` plus JSON `Accept` and `Content-Type`.
    ///
    /// A missing token, or one that is not a legal header value, produces an
    /// empty `Basic ` credential; the server answers that with 401.
    pub fn headers(&self) -> HeaderMap {
        let token = self.credentials.token().unwrap_or_default();
        let mut authorization = HeaderValue::from_str(&format!("Basic {token}"))
            .unwrap_or_else(|_| HeaderValue::from_static("Basic "));
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::with_capacity(3);
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(ACCEPT, HeaderValue::from_static(JSON));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON));
        headers
    }
}

//! REST client for the submission server.

use crate::config::Config;
use crate::credentials::SharedCredentials;
use crate::error::ApiError;
use crate::headers::AuthHeaderProvider;
use crate::models::{NextReleaseRequest, Release, SystemsPatch, SystemsStatus};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Operations the admin dashboard needs from the submission server.
///
/// Futures are not `Send`: in the browser they run on the single UI thread.
#[async_trait(?Send)]
pub trait AdminApi {
    /// The release currently open for submissions
    async fn upcoming_release(&self) -> Result<Release, ApiError>;
    async fn release(&self, name: &str) -> Result<Release, ApiError>;
    /// Close the upcoming release. `next_name` names the release opened in its place.
    async fn perform_release(&self, next_name: &str) -> Result<(), ApiError>;
    async fn systems(&self) -> Result<SystemsStatus, ApiError>;
    /// `false` locks submissions for non-admin accounts, `true` unlocks them.
    async fn set_submissions_active(&self, active: bool) -> Result<(), ApiError>;
    async fn validation_queue(&self) -> Result<Vec<String>, ApiError>;
    async fn clear_validation_queue(&self) -> Result<(), ApiError>;
}

/// `AdminApi` over HTTP, authorized with the shared credential token.
#[derive(Clone, Debug)]
pub struct SubmissionClient {
    config: Config,
    headers: AuthHeaderProvider<SharedCredentials>,
    http: reqwest::Client,
}

impl SubmissionClient {
    pub fn new(config: Config, credentials: SharedCredentials) -> Result<Self, ApiError> {
        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.request_timeout);

        Ok(Self {
            config,
            headers: AuthHeaderProvider::new(credentials),
            http: builder.build()?,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn credentials(&self) -> &SharedCredentials {
        self.headers.credentials()
    }

    /// Attach auth headers, send, and turn non-success statuses into errors.
    async fn execute(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        let resp = request.headers(self.headers.headers()).send().await?;
        let status = resp.status();
        debug!("{} {}", status.as_u16(), resp.url());

        if status.is_success() {
            Ok(resp)
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(ApiError::from_response(status.as_u16(), &body))
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.config.endpoint(path);
        let resp = self.execute(self.http.get(&url)).await?;
        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait(?Send)]
impl AdminApi for SubmissionClient {
    async fn upcoming_release(&self) -> Result<Release, ApiError> {
        // The server answers with a redirect to /releases/{name}
        self.get_json("/nextRelease").await
    }

    async fn release(&self, name: &str) -> Result<Release, ApiError> {
        self.get_json(&format!("/releases/{}", urlencoding::encode(name)))
            .await
    }

    async fn perform_release(&self, next_name: &str) -> Result<(), ApiError> {
        let url = self.config.endpoint("/nextRelease");
        let body = NextReleaseRequest { name: next_name };
        self.execute(self.http.post(&url).json(&body)).await?;
        Ok(())
    }

    async fn systems(&self) -> Result<SystemsStatus, ApiError> {
        self.get_json("/systems").await
    }

    async fn set_submissions_active(&self, active: bool) -> Result<(), ApiError> {
        let url = self.config.endpoint("/systems");
        let body = SystemsPatch { active };
        self.execute(self.http.patch(&url).json(&body)).await?;
        Ok(())
    }

    async fn validation_queue(&self) -> Result<Vec<String>, ApiError> {
        self.get_json("/nextRelease/queue").await
    }

    async fn clear_validation_queue(&self) -> Result<(), ApiError> {
        let url = self.config.endpoint("/nextRelease/queue");
        self.execute(self.http.delete(&url)).await?;
        Ok(())
    }
}

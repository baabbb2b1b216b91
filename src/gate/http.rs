//! HTTP implementation of the [`GateApi`] trait.

use crate::gate::{GateApi, GateError};
use crate::model::{Application, ApplicationRecord, CreateApplicationPayload};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A Gate client speaking plain REST over `reqwest`.
///
/// The client is cheap to clone and safe to share: the orchestration tool
/// constructs one per provider configuration and reuses it across every
/// lifecycle callback. No retry or backoff is layered on top; each call
/// blocks until the transport returns or times out.
#[derive(Clone)]
pub struct HttpGateClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpGateClient {
    /// Creates a client against the given Gate base URL (e.g.
    /// `http://gate.spinnaker:8084`) with the default request timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self, GateError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Creates a client with an explicit request timeout.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GateError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn application_url(&self, name: &str) -> String {
        format!("{}/applications/{}", self.base_url, name)
    }

    /// Turns a non-success response into a [`GateError`], reading the body
    /// for Gate's error message.
    async fn error_from(response: reqwest::Response, name: &str) -> GateError {
        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        GateError::from_response(status, message, name)
    }
}

#[async_trait]
impl GateApi for HttpGateClient {
    #[instrument(skip(self, app), fields(application = %app.name))]
    async fn create_application(&self, app: &Application) -> Result<(), GateError> {
        debug!("Sending create request");
        let payload = CreateApplicationPayload::from(app);
        let response = self
            .http
            .post(format!("{}/applications", self.base_url))
            .json(&payload)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from(response, &app.name).await)
        }
    }

    #[instrument(skip(self))]
    async fn get_application(&self, name: &str) -> Result<ApplicationRecord, GateError> {
        debug!("Sending get request");
        let response = self.http.get(self.application_url(name)).send().await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response, name).await);
        }

        let body = response.text().await?;
        let record: ApplicationRecord = serde_json::from_str(&body)?;
        Ok(record)
    }

    #[instrument(skip(self))]
    async fn delete_application(&self, name: &str) -> Result<(), GateError> {
        debug!("Sending delete request");
        let response = self.http.delete(self.application_url(name)).send().await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from(response, name).await)
        }
    }
}

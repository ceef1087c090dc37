//! JSON GET helper with a single attempt per call and a bounded timeout.
//! Success responses are decoded into the caller's type; failure envelopes
//! become [`ApiError::RequestFailed`].

use super::errors::{ApiError, DEFAULT_FAILURE_MESSAGE};
use crate::{config::ClientConfig, model::FailureEnvelope, APP_USER_AGENT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Maximum number of error message characters kept from a failure envelope.
const MAX_ERROR_CHARS: usize = 200;

/// HTTP client bound to one resolved API base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a client from explicit configuration.
    ///
    /// # Errors
    /// Returns `ApiError::Config` if the base URL is invalid or the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let base_url = config.base_url()?;
        let http = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(config.request_timeout)
            .build()
            .map_err(|err| ApiError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            base_url: base_url.to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues `GET {base_url}{endpoint}` and decodes the JSON body.
    ///
    /// # Errors
    /// Returns `RequestFailed` for non-success statuses, `Network`/`Timeout`
    /// for transport failures and `Parse` for bodies that are not valid JSON.
    pub async fn fetch_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = build_url_with_base(&self.base_url, endpoint);
        debug!(%url, "GET");

        let response = self.http.get(&url).send().await.map_err(map_request_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_request_error)?;

        if status.is_success() {
            serde_json::from_slice::<T>(&body)
                .map_err(|err| ApiError::Parse(format!("Failed to decode response: {err}")))
        } else {
            let envelope = serde_json::from_slice::<FailureEnvelope>(&body)
                .map_err(|err| ApiError::Parse(format!("Failed to decode error response: {err}")))?;
            let error = ApiError::RequestFailed {
                status: status.as_u16(),
                code: envelope.code,
                message: sanitize_message(envelope.message),
            };
            warn!(%url, "API error: {error}");
            Err(error)
        }
    }
}

/// Builds a URL from an explicit base URL and the provided endpoint.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

fn map_request_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout("Request timed out. Please try again.".to_string())
    } else if err.is_decode() {
        ApiError::Parse(format!("Failed to read response: {err}"))
    } else {
        ApiError::Network(format!("Unable to reach the server: {err}"))
    }
}

fn sanitize_message(message: Option<String>) -> String {
    let message = message.unwrap_or_default();
    let trimmed = message.trim();
    if trimmed.is_empty() {
        DEFAULT_FAILURE_MESSAGE.to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

use thiserror::Error;

use crate::models::StatusSnapshot;

/// API error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },
    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

#[cfg(target_arch = "wasm32")]
impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// Anything that can produce the latest status snapshot
#[allow(async_fn_in_trait)]
pub trait SnapshotSource {
    async fn fetch_snapshot(&self) -> Result<StatusSnapshot, ApiError>;
}

/// API client fetching the status document over HTTP
#[derive(Clone, Debug)]
pub struct ApiClient {
    data_url: String,
}

impl ApiClient {
    /// Create a client for the given data URL, relative to the page or absolute
    pub fn new(data_url: impl Into<String>) -> Self {
        Self {
            data_url: data_url.into(),
        }
    }

    pub fn data_url(&self) -> &str {
        &self.data_url
    }
}

/// Turn a response status and body into a snapshot
///
/// Bodies of non-2xx responses are never parsed.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub(crate) fn snapshot_from_response(status: u16, body: &str) -> Result<StatusSnapshot, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Http {
            status,
            message: body.to_string(),
        });
    }

    crate::models::parse_snapshot(body)
}

#[cfg(target_arch = "wasm32")]
impl SnapshotSource for ApiClient {
    async fn fetch_snapshot(&self) -> Result<StatusSnapshot, ApiError> {
        let response = gloo_net::http::Request::get(&self.data_url).send().await?;

        let status = response.status();
        let body = if response.ok() {
            response.text().await?
        } else {
            response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string())
        };

        snapshot_from_response(status, &body)
    }
}

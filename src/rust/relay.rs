//! Same-origin relay to the classification service.
//!
//! `POST /api/proxy` takes `{ "path": "/predict", "body": {...} }`, posts
//! `body` as JSON to `<base><path>` and hands back the upstream JSON
//! unchanged. Any failure becomes `{ "error": message }` with status 500.
//! There is no retry and no rewriting of the payload.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Status used for every relay failure.
pub const RELAY_FAILURE_STATUS: StatusCode = StatusCode::INTERNAL_SERVER_ERROR;
/// Message used when a failure carries no text of its own.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// Body accepted by the relay endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayRequest {
    pub path: String,
    pub body: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Invalid relay request: {0}")]
    InvalidRequest(#[from] serde_json::Error),
    #[error("Invalid relay path: {0}")]
    InvalidPath(String),
    #[error("{0}")]
    Transport(#[source] reqwest::Error),
    #[error("API error: {}", .0.canonical_reason().unwrap_or(UNKNOWN_ERROR_MESSAGE))]
    Status(reqwest::StatusCode),
    #[error("{0}")]
    Decode(#[source] reqwest::Error),
}

impl RelayError {
    /// The text placed in the `error` field.
    pub fn message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            UNKNOWN_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (RELAY_FAILURE_STATUS, Json(json!({ "error": self.message() }))).into_response()
    }
}

/// Forwards relay requests to one configured base address.
#[derive(Debug, Clone)]
pub struct Relay {
    client: reqwest::Client,
    base_url: String,
}

impl Relay {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Parses a raw relay body. Kept separate from the extractor so a
    /// malformed body gets the same `{ error }` shape as upstream failures.
    pub fn parse_request(raw: &[u8]) -> Result<RelayRequest, RelayError> {
        Ok(serde_json::from_slice(raw)?)
    }

    /// Posts `request.body` to `<base><request.path>` and returns the
    /// upstream JSON body.
    pub async fn forward(&self, request: &RelayRequest) -> Result<Value, RelayError> {
        // Anything not rooted at `/` could rewrite the authority of the base URL.
        if !request.path.starts_with('/') {
            warn!("Rejecting relay path {:?}", request.path);
            return Err(RelayError::InvalidPath(request.path.clone()));
        }
        let url = format!("{}{}", self.base_url, request.path);
        debug!("Relaying POST to {}", url);

        let response = self
            .client
            .post(&url)
            .json(&request.body)
            .send()
            .await
            .map_err(RelayError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            warn!("Relay target {} answered {}", url, status);
            return Err(RelayError::Status(status));
        }

        response.json().await.map_err(RelayError::Decode)
    }
}

use async_trait::async_trait;
use log::{debug, error, warn};
use serde::{Deserialize, Serialize};

use super::error::{AnalysisError, BATCH_FAILURE_MESSAGE, SINGLE_FAILURE_MESSAGE};
use super::types::{BatchItem, ClassificationRequest, ClassificationResult};
use crate::relay::RelayRequest;

/// Path of the single-review endpoint on the classification service.
pub const PREDICT_PATH: &str = "/predict";
/// Path of the batch endpoint on the classification service.
pub const BATCH_PREDICT_PATH: &str = "/batch-predict";

/// The two calls the dashboard makes against the classification service.
///
/// Panels depend on this trait rather than on [`HttpSentimentApi`] so they
/// can be driven by any transport.
#[async_trait]
pub trait SentimentApi: Send + Sync {
    /// Classifies one review.
    async fn predict(&self, text: &str) -> Result<ClassificationResult, AnalysisError>;

    /// Classifies several reviews; the response keeps the input order.
    async fn batch_predict(&self, reviews: &[String]) -> Result<Vec<BatchItem>, AnalysisError>;
}

/// Where requests are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// POST straight to `<base><path>`.
    Direct(String),
    /// POST `{ path, body }` to a relay endpoint such as `/api/proxy`.
    Relay(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// reqwest-backed [`SentimentApi`].
#[derive(Debug, Clone)]
pub struct HttpSentimentApi {
    client: reqwest::Client,
    route: Route,
}

impl HttpSentimentApi {
    /// Talks to the classification service at `base_url` directly.
    pub fn direct(base_url: impl Into<String>) -> Self {
        let base = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            route: Route::Direct(base),
        }
    }

    /// Sends every call through the relay endpoint at `relay_url`.
    pub fn via_relay(relay_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            route: Route::Relay(relay_url.into()),
        }
    }

    /// Replaces the underlying HTTP client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    async fn post<B>(&self, path: &str, body: &B) -> Result<reqwest::Response, AnalysisError>
    where
        B: Serialize + Sync + ?Sized,
    {
        let request = match &self.route {
            Route::Direct(base) => {
                debug!("POST {}{}", base, path);
                self.client.post(format!("{}{}", base, path)).json(body)
            }
            Route::Relay(relay) => {
                debug!("POST {} (relay to {})", relay, path);
                let envelope = RelayRequest {
                    path: path.to_string(),
                    body: serde_json::to_value(body)?,
                };
                self.client.post(relay.as_str()).json(&envelope)
            }
        };

        request.send().await.map_err(|e| {
            error!("Sentiment analysis error: {}", e);
            AnalysisError::Transport(e)
        })
    }
}

#[async_trait]
impl SentimentApi for HttpSentimentApi {
    async fn predict(&self, text: &str) -> Result<ClassificationResult, AnalysisError> {
        let response = self.post(PREDICT_PATH, &ClassificationRequest::new(text)).await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail)
                .filter(|detail| !detail.is_empty());
            warn!("{} returned {} (detail: {:?})", PREDICT_PATH, status, detail);
            return Err(AnalysisError::Upstream(
                detail.unwrap_or_else(|| SINGLE_FAILURE_MESSAGE.to_string()),
            ));
        }

        response.json().await.map_err(|e| {
            error!("Could not decode {} response: {}", PREDICT_PATH, e);
            AnalysisError::Decode(e)
        })
    }

    async fn batch_predict(&self, reviews: &[String]) -> Result<Vec<BatchItem>, AnalysisError> {
        let payload: Vec<ClassificationRequest> = reviews
            .iter()
            .map(|text| ClassificationRequest::new(text.as_str()))
            .collect();
        debug!("Submitting batch of {} reviews", payload.len());
        let response = self.post(BATCH_PREDICT_PATH, payload.as_slice()).await?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} returned {}", BATCH_PREDICT_PATH, status);
            return Err(AnalysisError::Upstream(BATCH_FAILURE_MESSAGE.to_string()));
        }

        response.json().await.map_err(|e| {
            error!("Could not decode {} response: {}", BATCH_PREDICT_PATH, e);
            AnalysisError::Decode(e)
        })
    }
}

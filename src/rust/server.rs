//! HTTP surface of the dashboard.
//!
//! Every request builds a fresh [`AnalyzerShell`], applies the submitted form
//! to one panel and renders the whole page. Nothing is kept between requests.

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::analysis::{HttpSentimentApi, SentimentApi};
use crate::config::DashboardConfig;
use crate::relay::Relay;
use crate::shell::{AnalyzerShell, Tab};
use crate::view::render_dashboard;

/// Path of the same-origin relay endpoint.
pub const RELAY_PATH: &str = "/api/proxy";

/// Shared handler state. Owns the configured service base: the panels reach
/// it through `api` and the relay through `relay`.
#[derive(Clone)]
pub struct AppState {
    api: Arc<dyn SentimentApi>,
    relay: Relay,
    config: DashboardConfig,
}

impl AppState {
    /// State that talks to `config.api_url` directly.
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            api: Arc::new(HttpSentimentApi::direct(config.api_url.as_str())),
            relay: Relay::new(config.api_url.as_str()),
            config,
        }
    }

    /// Replaces the client the panels submit through.
    pub fn with_api(mut self, api: Arc<dyn SentimentApi>) -> Self {
        self.api = api;
        self
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }
}

/// What a panel form asks for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelAction {
    #[default]
    Analyze,
    Clear,
}

#[derive(Debug, Deserialize)]
struct TabQuery {
    tab: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SingleForm {
    #[serde(default)]
    text: String,
    #[serde(default)]
    action: PanelAction,
}

#[derive(Debug, Deserialize)]
struct BatchForm {
    #[serde(default)]
    reviews: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    api_url: String,
}

/// Builds the dashboard router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/single", post(submit_single))
        .route("/batch", post(submit_batch))
        .route(RELAY_PATH, post(relay))
        .route("/health", get(health))
        .with_state(state)
}

/// Serves the dashboard on `listener` until the process stops.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    info!(
        "Dashboard listening on http://{} (sentiment service: {})",
        listener.local_addr()?,
        state.config.api_url
    );
    axum::serve(listener, router(state)).await
}

async fn index(Query(query): Query<TabQuery>) -> Html<String> {
    let tab = query
        .tab
        .as_deref()
        .and_then(|tab| tab.parse::<Tab>().ok())
        .unwrap_or_default();

    let mut shell = AnalyzerShell::new();
    shell.select(tab);
    Html(render_dashboard(&shell))
}

async fn submit_single(State(state): State<AppState>, Form(form): Form<SingleForm>) -> Html<String> {
    let mut shell = AnalyzerShell::new();
    shell.select(Tab::Single);

    let panel = shell.single_mut();
    panel.set_input(form.text);
    match form.action {
        PanelAction::Analyze => panel.submit(state.api.as_ref()).await,
        PanelAction::Clear => panel.clear(),
    }
    debug!("Single review settled (error: {:?})", panel.error());

    Html(render_dashboard(&shell))
}

async fn submit_batch(State(state): State<AppState>, Form(form): Form<BatchForm>) -> Html<String> {
    let mut shell = AnalyzerShell::new();
    shell.select(Tab::Batch);

    let panel = shell.batch_mut();
    panel.set_input(form.reviews);
    panel.submit(state.api.as_ref()).await;
    debug!(
        "Batch settled with {} results (error: {:?})",
        panel.results().len(),
        panel.error()
    );

    Html(render_dashboard(&shell))
}

async fn relay(State(state): State<AppState>, body: Bytes) -> Response {
    let outcome = match Relay::parse_request(&body) {
        Ok(request) => state.relay.forward(&request).await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(value) => Json(value).into_response(),
        Err(e) => {
            warn!("Relay failed: {}", e.message());
            e.into_response()
        }
    }
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        api_url: state.config.api_url.clone(),
    })
}

#![allow(dead_code)]

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use sentiment_dashboard::{router, AppState, DashboardConfig};

#[derive(Debug, Deserialize)]
struct Review {
    text: String,
}

/// Request counters for the fake classification service.
#[derive(Debug, Default)]
pub struct Calls {
    pub predict: AtomicUsize,
    pub batch: AtomicUsize,
}

impl Calls {
    pub fn predict(&self) -> usize {
        self.predict.load(Ordering::SeqCst)
    }

    pub fn batch(&self) -> usize {
        self.batch.load(Ordering::SeqCst)
    }
}

/// Classifies like the real service would, keyed on a few words:
/// - "unavailable" -> 503 `{ "detail": "model unavailable" }`
/// - "crash"       -> 500 with a non-JSON body
/// - "great"/"love" -> Positive, anything else Negative
///
/// `POST /garbled` answers 200 with a body that is not JSON.
fn classify(text: &str) -> Value {
    let lower = text.to_lowercase();
    let positive = lower.contains("great") || lower.contains("love");
    let p = if positive { 0.87 } else { 0.25 };
    json!({
        "text": text.trim(),
        "sentiment": if positive { "Positive" } else { "Negative" },
        "confidence": if positive { p } else { 1.0 - p },
        "probabilities": { "negative": 1.0 - p, "positive": p },
        "vocab_coverage": 64.2,
    })
}

fn fake_service(calls: Arc<Calls>) -> Router {
    let predict_calls = Arc::clone(&calls);
    let batch_calls = calls;

    Router::new()
        .route(
            "/predict",
            post(move |Json(review): Json<Review>| {
                let calls = Arc::clone(&predict_calls);
                async move {
                    calls.predict.fetch_add(1, Ordering::SeqCst);
                    if review.text.contains("unavailable") {
                        return (
                            StatusCode::SERVICE_UNAVAILABLE,
                            Json(json!({ "detail": "model unavailable" })),
                        )
                            .into_response();
                    }
                    if review.text.contains("crash") {
                        return (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response();
                    }
                    Json(classify(&review.text)).into_response()
                }
            }),
        )
        .route(
            "/batch-predict",
            post(move |Json(reviews): Json<Vec<Review>>| {
                let calls = Arc::clone(&batch_calls);
                async move {
                    calls.batch.fetch_add(1, Ordering::SeqCst);
                    if reviews.iter().any(|r| r.text.contains("unavailable")) {
                        return (
                            StatusCode::SERVICE_UNAVAILABLE,
                            Json(json!({ "detail": "model unavailable" })),
                        )
                            .into_response();
                    }
                    let body: Vec<Value> = reviews.iter().map(|r| classify(&r.text)).collect();
                    Json(body).into_response()
                }
            }),
        )
        .route("/garbled", post(|| async { "<html>not json</html>" }))
}

async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Starts the fake classification service and returns its base URL.
pub async fn spawn_service() -> (String, Arc<Calls>) {
    let calls = Arc::new(Calls::default());
    let base = spawn(fake_service(Arc::clone(&calls))).await;
    (base, calls)
}

/// Starts the dashboard pointed at `api_url` and returns its base URL.
pub async fn spawn_dashboard(api_url: &str) -> String {
    let config = DashboardConfig::default().with_api_url(api_url);
    spawn(router(AppState::new(config))).await
}

/// Base URL nothing is listening on.
pub async fn dead_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

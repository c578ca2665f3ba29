//! A server-rendered dashboard for a remote sentiment classification service.
//!
//! The crate holds no model. Reviews are posted to an external service
//! (`POST <base>/predict` and `POST <base>/batch-predict`) and the answers
//! are rendered as HTML. A same-origin relay (`POST /api/proxy`) forwards
//! arbitrary calls to the same service.
//!
//! # Basic Usage
//!
//! ```rust,no_run
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use sentiment_dashboard::{HttpSentimentApi, SinglePanel};
//!
//! let api = HttpSentimentApi::direct("http://localhost:8000");
//! let mut panel = SinglePanel::with_input("The support team was fantastic");
//! panel.submit(&api).await;
//!
//! match (panel.result(), panel.error()) {
//!     (Some(result), _) => println!("{} ({:.0}%)", result.sentiment, result.confidence * 100.0),
//!     (_, Some(error)) => eprintln!("{}", error),
//!     _ => {}
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Serving the dashboard
//!
//! ```rust,no_run
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use sentiment_dashboard::{serve, AppState, DashboardConfig};
//!
//! let config = DashboardConfig::from_env();
//! let listener = tokio::net::TcpListener::bind(config.listen).await?;
//! serve(listener, AppState::new(config)).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Stale responses
//!
//! Each panel numbers its submissions. An outcome is only applied if it
//! belongs to the latest submission of that panel:
//!
//! ```rust
//! use sentiment_dashboard::{AnalysisError, SinglePanel};
//!
//! let mut panel = SinglePanel::with_input("first");
//! let first = panel.begin().unwrap();
//! panel.set_input("second");
//! let _second = panel.begin().unwrap();
//!
//! // The first request comes back late and is ignored.
//! assert!(!panel.settle(&first, Err(AnalysisError::Upstream("late".into()))));
//! assert!(panel.is_loading());
//! ```

#![recursion_limit = "256"]

pub mod analysis;
pub mod config;
pub mod panels;
pub mod relay;
pub mod server;
pub mod shell;
pub mod view;

pub use analysis::{
    AnalysisError, BatchItem, ClassificationRequest, ClassificationResult, ErrorKind,
    HttpSentimentApi, Probabilities, Route, Sentiment, SentimentApi, SentimentLabel,
};
pub use config::{DashboardConfig, API_URL_ENV, DEFAULT_API_URL};
pub use panels::{BatchPanel, BatchSummary, SinglePanel, Submission};
pub use relay::{Relay, RelayError, RelayRequest};
pub use server::{router, serve, AppState, RELAY_PATH};
pub use shell::{AnalyzerShell, Tab};
pub use view::{render_dashboard, render_result, ResultView};

/// Initializes `env_logger`, defaulting to the `info` level when `RUST_LOG`
/// is unset.
pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

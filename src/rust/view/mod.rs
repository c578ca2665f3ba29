//! Server-side rendered markup.
//!
//! Components are Leptos `#[component]` functions rendered straight to a
//! string with `RenderHtml::to_html`; no reactive runtime or hydration is
//! involved, every request renders the page from scratch.
//!
//! ```text
//! DashboardDocument
//! ├── SiteHeader
//! ├── TabBar
//! └── SinglePanelView | BatchPanelView
//!     ├── ErrorBanner
//!     └── ResultCard (single) / SummaryTile + rows (batch)
//! ```

mod document;
mod panels;
pub mod result;
pub mod styles;

pub use document::{DashboardDocument, TabBar};
pub use panels::{BatchPanelView, ErrorBanner, SinglePanelView};
pub use result::{BatchRowView, ResultCard, ResultView};

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

use crate::analysis::ClassificationResult;
use crate::shell::AnalyzerShell;

/// Renders the full dashboard page, including `<!DOCTYPE html>`.
pub fn render_dashboard(shell: &AnalyzerShell) -> String {
    let doc = view! { <DashboardDocument shell=shell.clone() /> };

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", doc.to_html())
}

/// Renders just the result card for `result`.
pub fn render_result(result: &ClassificationResult) -> String {
    view! { <ResultCard result=ResultView::from_result(result) /> }.to_html()
}

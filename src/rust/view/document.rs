//! Page shell: document head, header and tab navigation.

use leptos::prelude::*;

use super::panels::{BatchPanelView, SinglePanelView};
use super::styles::DASHBOARD_CSS;
use crate::shell::{AnalyzerShell, Tab};

/// The complete dashboard page for one shell state.
#[component]
pub fn DashboardDocument(shell: AnalyzerShell) -> impl IntoView {
    let active = shell.active();

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>"Sentiment Analysis"</title>
                <style>{DASHBOARD_CSS}</style>
            </head>
            <body>
                <SiteHeader />
                <main class="container">
                    <TabBar active=active />
                    {match active {
                        Tab::Single => view! { <SinglePanelView panel=shell.single().clone() /> }.into_any(),
                        Tab::Batch => view! { <BatchPanelView panel=shell.batch().clone() /> }.into_any(),
                    }}
                </main>
            </body>
        </html>
    }
}

#[component]
fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="inner">
                <div>
                    <h1>"Sentiment Analysis"</h1>
                    <p class="tagline">"Analyze customer feedback and reviews in real-time"</p>
                </div>
                <div class="pill">"Customer Support"</div>
            </div>
        </header>
    }
}

/// Tab links; the active one is highlighted.
#[component]
pub fn TabBar(active: Tab) -> impl IntoView {
    view! {
        <nav class="tab-bar">
            {Tab::ALL.into_iter().map(|tab| {
                let class = if tab == active { "tab active" } else { "tab" };
                view! {
                    <a class=class href=format!("/?tab={}", tab)>{tab.title()}</a>
                }
            }).collect::<Vec<_>>()}
        </nav>
    }
}

//! Markup for the single-review and batch panels.

use leptos::prelude::*;

use super::result::{tone_class, BatchRowView, ResultCard, ResultView};
use crate::panels::{BatchPanel, SinglePanel};

/// Inline error box; renders nothing without a message.
#[component]
pub fn ErrorBanner(message: Option<String>) -> impl IntoView {
    message.map(|message| {
        view! { <div class="error" role="alert">{message}</div> }
    })
}

/// Escapes text placed inside `<textarea>`, whose children the renderer
/// writes out raw.
fn escape_textarea(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Submit button label: "Analyzing..." while a request is in flight.
fn submit_label(loading: bool, idle: &'static str) -> &'static str {
    if loading {
        "Analyzing..."
    } else {
        idle
    }
}

/// Text box, analyze/clear actions and, once settled, the result card.
#[component]
pub fn SinglePanelView(panel: SinglePanel) -> impl IntoView {
    let loading = panel.is_loading();
    let error = panel.error().map(str::to_string);
    let result = panel.result().map(ResultView::from_result);

    view! {
        <div class="grid two-columns">
            <div class="card">
                <h2>"Enter Customer Review"</h2>
                <form method="post" action="/single">
                    <textarea
                        name="text"
                        rows="8"
                        placeholder="Paste a customer review or feedback here..."
                    >
                        {escape_textarea(panel.input())}
                    </textarea>
                    <ErrorBanner message=error />
                    // Without client script an empty box could never re-enable the
                    // button, so only an in-flight request disables it here.
                    <div class="actions">
                        <button type="submit" name="action" value="analyze" class="primary" disabled=loading>
                            {submit_label(loading, "Analyze Sentiment")}
                        </button>
                        <button type="submit" name="action" value="clear" class="secondary">
                            "Clear"
                        </button>
                    </div>
                </form>
            </div>
            {result.map(|result| view! { <ResultCard result=result /> })}
        </div>
    }
}

#[component]
fn SummaryTile(label: &'static str, tone: &'static str, count: usize) -> impl IntoView {
    view! {
        <div class="card tile">
            <div class=format!("muted {}", tone)>{label}</div>
            <div class=format!("count {}", tone)>{count.to_string()}</div>
        </div>
    }
}

/// Multi-line input plus, when there are results, summary tiles and a list.
#[component]
pub fn BatchPanelView(panel: BatchPanel) -> impl IntoView {
    let loading = panel.is_loading();
    let error = panel.error().map(str::to_string);
    let summary = panel.summary();
    let rows: Vec<BatchRowView> = panel.results().iter().map(BatchRowView::from_item).collect();

    view! {
        <div class="stack">
            <div class="card">
                <h2>"Batch Analysis"</h2>
                <p class="muted">"Enter one review per line to analyze multiple reviews at once"</p>
                <form method="post" action="/batch">
                    <textarea name="reviews" rows="10" placeholder="Review 1\nReview 2\nReview 3...">
                        {escape_textarea(panel.input())}
                    </textarea>
                    <ErrorBanner message=error />
                    <button type="submit" class="primary" disabled=loading>
                        {submit_label(loading, "Analyze Batch")}
                    </button>
                </form>
            </div>

            {(!rows.is_empty()).then(move || view! {
                <div class="grid three-columns">
                    <SummaryTile label="Total Reviews" tone="total" count=summary.total />
                    <SummaryTile label="Positive" tone="positive" count=summary.positive />
                    <SummaryTile label="Negative" tone="negative" count=summary.negative />
                </div>

                <div class="card">
                    <h3>"Results"</h3>
                    <ul class="results">
                        {rows.into_iter().map(|row| {
                            let tone = tone_class(row.tone);
                            view! {
                                <li class="result-row">
                                    <p>{row.text}</p>
                                    <span class=format!("badge {}", tone)>{row.label}</span>
                                    <span class="muted">{format!("{}%", row.confidence_percent)}</span>
                                </li>
                            }
                        }).collect::<Vec<_>>()}
                    </ul>
                </div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{BatchItem, SentimentLabel};
    use crate::panels::testing::sample_result;
    use leptos::prelude::*;
    use leptos::tachys::view::RenderHtml;

    fn single_html(panel: SinglePanel) -> String {
        view! { <SinglePanelView panel=panel /> }.to_html()
    }

    fn batch_html(panel: BatchPanel) -> String {
        view! { <BatchPanelView panel=panel /> }.to_html()
    }

    #[test]
    fn test_idle_single_panel_has_no_result_or_error() {
        let html = single_html(SinglePanel::new());
        assert!(html.contains("Analyze Sentiment"));
        assert!(!html.contains("role=\"alert\""));
        assert!(!html.contains("Probability Breakdown"));
    }

    #[test]
    fn test_single_panel_shows_validation_error() {
        let mut panel = SinglePanel::with_input("   ");
        assert!(panel.begin().is_none());
        let html = single_html(panel);
        assert!(html.contains("Please enter some text to analyze"));
    }

    #[test]
    fn test_loading_single_panel() {
        let mut panel = SinglePanel::with_input("pending");
        let _ticket = panel.begin();
        let html = single_html(panel);
        assert!(html.contains("Analyzing..."));
        assert!(html.contains("disabled"));
    }

    #[test]
    fn test_single_panel_escapes_input() {
        let mut panel = SinglePanel::with_input("<script>alert(1)</script>");
        let ticket = panel.begin().unwrap();
        panel.settle(&ticket, Ok(sample_result("<script>alert(1)</script>")));
        let html = single_html(panel);
        assert!(!html.contains("<script>"));
        assert!(html.contains(">&lt;script&gt;alert(1)&lt;/script&gt;</textarea>"));
    }

    #[test]
    fn test_textarea_cannot_be_closed_by_input() {
        let html = single_html(SinglePanel::with_input("</textarea><script>alert(1)</script>"));
        assert!(!html.contains("<script>"));
        assert_eq!(html.matches("</textarea>").count(), 1);
        assert!(html.contains("&lt;/textarea&gt;&lt;script&gt;"));
    }

    #[test]
    fn test_textarea_content_round_trips() {
        let html = single_html(SinglePanel::with_input("Great <b> & done"));
        assert!(html.contains(">Great &lt;b&gt; &amp; done</textarea>"));

        let html = batch_html(BatchPanel::with_input("a & b\n<i>c</i>"));
        assert!(html.contains(">a &amp; b\n&lt;i&gt;c&lt;/i&gt;</textarea>"));
    }

    #[test]
    fn test_escape_textarea() {
        assert_eq!(escape_textarea("plain text"), "plain text");
        assert_eq!(escape_textarea("<&>"), "&lt;&amp;&gt;");
    }

    #[test]
    fn test_batch_summary_hidden_without_results() {
        let html = batch_html(BatchPanel::with_input("one\ntwo"));
        assert!(!html.contains("Total Reviews"));
    }

    #[test]
    fn test_batch_rows_and_summary() {
        let mut panel = BatchPanel::with_input("Great!\nTerrible.");
        let ticket = panel.begin().unwrap();
        panel.settle(
            &ticket,
            Ok(vec![
                BatchItem {
                    text: "Great!".into(),
                    sentiment: SentimentLabel::new("Positive"),
                    confidence: 0.91,
                },
                BatchItem {
                    text: "Terrible.".into(),
                    sentiment: SentimentLabel::new("Negative"),
                    confidence: 0.78,
                },
            ]),
        );
        let html = batch_html(panel);

        assert!(html.contains("Total Reviews"));
        assert!(html.contains("badge positive"));
        assert!(html.contains("badge negative"));
        assert!(html.contains("91%"));
        assert!(html.contains("78%"));
        let first = html.find("Great!").unwrap();
        let second = html.find("Terrible.").unwrap();
        assert!(first < second);
    }
}

//! Result Renderer: display values and markup for one classification.

use leptos::prelude::*;

use crate::analysis::utils::bar_width;
use crate::analysis::{percent, word_count, BatchItem, ClassificationResult, Sentiment};

/// CSS class for a tone.
pub fn tone_class(tone: Sentiment) -> &'static str {
    match tone {
        Sentiment::Positive => "positive",
        Sentiment::Negative => "negative",
    }
}

/// Everything the result card shows, derived from a [`ClassificationResult`]
/// without any other input.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    /// Label as received.
    pub label: String,
    pub tone: Sentiment,
    pub confidence_percent: i64,
    pub positive_percent: i64,
    pub negative_percent: i64,
    pub positive_width: String,
    pub negative_width: String,
    /// Coverage with one decimal, e.g. `"64.2%"`.
    pub coverage: String,
    /// Whitespace-separated tokens in the submitted text.
    pub word_count: usize,
}

impl ResultView {
    pub fn from_result(result: &ClassificationResult) -> Self {
        Self {
            label: result.sentiment.as_str().to_string(),
            tone: result.sentiment.tone(),
            confidence_percent: percent(result.confidence),
            positive_percent: percent(result.probabilities.positive),
            negative_percent: percent(result.probabilities.negative),
            positive_width: bar_width(result.probabilities.positive),
            negative_width: bar_width(result.probabilities.negative),
            coverage: format!("{:.1}%", result.vocab_coverage),
            word_count: word_count(&result.text),
        }
    }
}

/// One line of the batch result list.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchRowView {
    pub text: String,
    pub label: String,
    pub tone: Sentiment,
    pub confidence_percent: i64,
}

impl BatchRowView {
    pub fn from_item(item: &BatchItem) -> Self {
        Self {
            text: item.text.clone(),
            label: item.sentiment.as_str().to_string(),
            tone: item.sentiment.tone(),
            confidence_percent: percent(item.confidence),
        }
    }
}

/// Sentiment badge, probability breakdown and analysis details.
#[component]
pub fn ResultCard(result: ResultView) -> impl IntoView {
    let tone = tone_class(result.tone);

    view! {
        <div class="stack result">
            <div class=format!("card sentiment-badge {}", tone)>
                <div class="muted">"Sentiment"</div>
                <div class=format!("sentiment-label {}", tone)>{result.label}</div>
                <div class="muted">{format!("Confidence: {}%", result.confidence_percent)}</div>
            </div>

            <div class="card">
                <h3>"Probability Breakdown"</h3>
                <ProbabilityBar
                    name="Positive"
                    tone=Sentiment::Positive
                    value=result.positive_percent
                    width=result.positive_width
                />
                <ProbabilityBar
                    name="Negative"
                    tone=Sentiment::Negative
                    value=result.negative_percent
                    width=result.negative_width
                />
            </div>

            <div class="card">
                <h3>"Analysis Details"</h3>
                <div class="detail-row">
                    <span class="label">"Vocabulary Coverage"</span>
                    <span class="value">{result.coverage}</span>
                </div>
                <div class="detail-row">
                    <span class="label">"Text Length"</span>
                    <span class="value">{format!("{} words", result.word_count)}</span>
                </div>
            </div>
        </div>
    }
}

/// Labelled horizontal bar for one class probability.
#[component]
fn ProbabilityBar(name: &'static str, tone: Sentiment, value: i64, width: String) -> impl IntoView {
    let tone = tone_class(tone);

    view! {
        <div class="bar-row">
            <div class="bar-legend">
                <span>{name}</span>
                <span class=tone>{format!("{}%", value)}</span>
            </div>
            <div class="bar-track">
                <div
                    class=format!("bar-fill {}", tone)
                    style=format!("width: {}", width)
                ></div>
            </div>
        </div>
    }
}

use async_trait::async_trait;
use std::sync::Mutex;

use crate::analysis::{
    AnalysisError, BatchItem, ClassificationResult, Probabilities, Sentiment, SentimentApi,
    SentimentLabel,
};

/// Deterministic result: "Positive" when the text mentions great/love/good.
pub(crate) fn sample_result(text: &str) -> ClassificationResult {
    let lower = text.to_lowercase();
    let positive = ["great", "love", "good"].iter().any(|w| lower.contains(w));
    let (p, sentiment) = if positive {
        (0.87, Sentiment::Positive)
    } else {
        (0.2, Sentiment::Negative)
    };
    ClassificationResult {
        text: text.to_string(),
        sentiment: sentiment.into(),
        confidence: if positive { p } else { 1.0 - p },
        probabilities: Probabilities {
            positive: p,
            negative: 1.0 - p,
        },
        vocab_coverage: 64.2,
    }
}

/// In-memory [`SentimentApi`] that records every call.
#[derive(Default)]
pub(crate) struct ScriptedApi {
    failure: Option<String>,
    labels: Option<Vec<&'static str>>,
    predict_calls: Mutex<Vec<String>>,
    batch_calls: Mutex<Vec<Vec<String>>>,
}

impl ScriptedApi {
    pub(crate) fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    /// Batch responses use these labels, in order, instead of the text heuristic.
    pub(crate) fn with_labels(labels: Vec<&'static str>) -> Self {
        Self {
            labels: Some(labels),
            ..Self::default()
        }
    }

    pub(crate) fn predict_calls(&self) -> Vec<String> {
        self.predict_calls.lock().unwrap().clone()
    }

    pub(crate) fn batch_calls(&self) -> Vec<Vec<String>> {
        self.batch_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SentimentApi for ScriptedApi {
    async fn predict(&self, text: &str) -> Result<ClassificationResult, AnalysisError> {
        self.predict_calls.lock().unwrap().push(text.to_string());
        match &self.failure {
            Some(message) => Err(AnalysisError::Upstream(message.clone())),
            None => Ok(sample_result(text)),
        }
    }

    async fn batch_predict(&self, reviews: &[String]) -> Result<Vec<BatchItem>, AnalysisError> {
        self.batch_calls.lock().unwrap().push(reviews.to_vec());
        if let Some(message) = &self.failure {
            return Err(AnalysisError::Upstream(message.clone()));
        }
        Ok(reviews
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let result = sample_result(text);
                let sentiment = match &self.labels {
                    Some(labels) => SentimentLabel::new(labels[i % labels.len()]),
                    None => result.sentiment,
                };
                BatchItem {
                    text: result.text,
                    sentiment,
                    confidence: result.confidence,
                }
            })
            .collect())
    }
}

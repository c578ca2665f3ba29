use log::debug;

use super::{RequestTracker, Submission};
use crate::analysis::{split_reviews, AnalysisError, BatchItem, Sentiment, SentimentApi};

/// Totals shown above the batch results.
///
/// Only the exact labels `"Positive"` and `"Negative"` are counted, so with
/// any other label `positive + negative < total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
}

impl BatchSummary {
    pub fn from_results(results: &[BatchItem]) -> Self {
        let count = |wanted: Sentiment| {
            results
                .iter()
                .filter(|item| item.sentiment.known() == Some(wanted))
                .count()
        };
        Self {
            total: results.len(),
            positive: count(Sentiment::Positive),
            negative: count(Sentiment::Negative),
        }
    }
}

/// State of the batch panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchPanel {
    input: String,
    loading: bool,
    error: Option<String>,
    results: Vec<BatchItem>,
    tracker: RequestTracker,
}

impl BatchPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            ..Self::default()
        }
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn results(&self) -> &[BatchItem] {
        &self.results
    }

    pub fn summary(&self) -> BatchSummary {
        BatchSummary::from_results(&self.results)
    }

    pub fn can_submit(&self) -> bool {
        !self.loading && !self.input.trim().is_empty()
    }

    /// Starts a submission. Returns `None` and sets the empty-batch error when
    /// no line survives trimming; otherwise clears old results and error,
    /// sets loading and returns the reviews to send.
    pub fn begin(&mut self) -> Option<Submission<Vec<String>>> {
        let reviews = split_reviews(&self.input);
        if reviews.is_empty() {
            self.error = Some(AnalysisError::EmptyBatch.to_string());
            return None;
        }

        self.loading = true;
        self.error = None;
        self.results.clear();
        Some(self.tracker.issue(reviews))
    }

    /// Applies the outcome of `submission` unless a newer one has started.
    pub fn settle(
        &mut self,
        submission: &Submission<Vec<String>>,
        outcome: Result<Vec<BatchItem>, AnalysisError>,
    ) -> bool {
        if !self.tracker.is_current(submission) {
            debug!("Dropping stale batch response #{}", submission.generation());
            return false;
        }

        match outcome {
            Ok(results) => self.results = results,
            Err(e) => self.error = Some(e.to_string()),
        }
        self.loading = false;
        true
    }

    /// Validates, calls `api.batch_predict` at most once and settles.
    pub async fn submit<A>(&mut self, api: &A)
    where
        A: SentimentApi + ?Sized,
    {
        let Some(submission) = self.begin() else {
            return;
        };
        let outcome = api.batch_predict(submission.payload()).await;
        self.settle(&submission, outcome);
    }
}

use log::debug;

use super::{RequestTracker, Submission};
use crate::analysis::{AnalysisError, ClassificationResult, SentimentApi};

/// State of the single-review panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SinglePanel {
    input: String,
    loading: bool,
    error: Option<String>,
    result: Option<ClassificationResult>,
    tracker: RequestTracker,
}

impl SinglePanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh panel whose text box already holds `input`.
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

    pub fn result(&self) -> Option<&ClassificationResult> {
        self.result.as_ref()
    }

    /// Whether the analyze action is enabled: not loading and some text entered.
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.input.trim().is_empty()
    }

    /// Starts a submission.
    ///
    /// Empty (after trimming) input sets the empty-text error and returns
    /// `None`; nothing else changes and no request should be made. Otherwise
    /// loading is set, the previous error and result are dropped, and the
    /// trimmed text to send is returned in a ticket.
    pub fn begin(&mut self) -> Option<Submission<String>> {
        let text = self.input.trim();
        if text.is_empty() {
            self.error = Some(AnalysisError::EmptyText.to_string());
            return None;
        }

        let submission = self.tracker.issue(text.to_string());
        self.loading = true;
        self.error = None;
        self.result = None;
        Some(submission)
    }

    /// Applies the outcome of `submission`. Returns `false`, leaving the
    /// panel untouched, if a newer submission has been started since.
    pub fn settle(
        &mut self,
        submission: &Submission<String>,
        outcome: Result<ClassificationResult, AnalysisError>,
    ) -> bool {
        if !self.tracker.is_current(submission) {
            debug!("Dropping stale single-review response #{}", submission.generation());
            return false;
        }

        match outcome {
            Ok(result) => self.result = Some(result),
            Err(e) => self.error = Some(e.to_string()),
        }
        self.loading = false;
        true
    }

    /// Validates, calls `api.predict` at most once and settles.
    pub async fn submit<A>(&mut self, api: &A)
    where
        A: SentimentApi + ?Sized,
    {
        let Some(submission) = self.begin() else {
            return;
        };
        let outcome = api.predict(submission.payload()).await;
        self.settle(&submission, outcome);
    }

    /// Resets text, result and error. Loading is left alone.
    pub fn clear(&mut self) {
        self.input.clear();
        self.result = None;
        self.error = None;
    }
}

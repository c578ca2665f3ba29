/// Shown when the single-review input is empty after trimming.
pub const EMPTY_TEXT_MESSAGE: &str = "Please enter some text to analyze";
/// Shown when the batch input has no non-blank lines.
pub const EMPTY_BATCH_MESSAGE: &str = "Please enter at least one review";
/// Fallback for a failed `/predict` call without a usable `detail`.
pub const SINGLE_FAILURE_MESSAGE: &str = "Failed to analyze sentiment";
/// Every failed `/batch-predict` call reports this, whatever the body says.
pub const BATCH_FAILURE_MESSAGE: &str = "Failed to analyze batch";

/// Coarse classes of failure, one per row of the dashboard's error taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected locally; no request was made.
    Validation,
    /// The request never produced a usable response.
    Transport,
    /// The service answered with a non-success status.
    Upstream,
}

/// Represents the ways a submission can fail.
///
/// The `Display` output is exactly what the panels show to the user, so
/// transport-level variants render a generic message and keep the
/// underlying error only as their `source`.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("{}", EMPTY_TEXT_MESSAGE)]
    EmptyText,
    #[error("{}", EMPTY_BATCH_MESSAGE)]
    EmptyBatch,
    #[error("{0}")]
    Upstream(String),
    #[error("Could not reach the sentiment service")]
    Transport(#[source] reqwest::Error),
    #[error("Unexpected response from the sentiment service")]
    Decode(#[source] reqwest::Error),
    #[error("Could not encode the request payload")]
    Encode(#[from] serde_json::Error),
}

impl AnalysisError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyText | Self::EmptyBatch => ErrorKind::Validation,
            Self::Upstream(_) => ErrorKind::Upstream,
            Self::Transport(_) | Self::Decode(_) | Self::Encode(_) => ErrorKind::Transport,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(AnalysisError::EmptyText.to_string(), "Please enter some text to analyze");
        assert_eq!(AnalysisError::EmptyBatch.to_string(), "Please enter at least one review");
        assert_eq!(AnalysisError::EmptyText.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_upstream_message_is_shown_verbatim() {
        let err = AnalysisError::Upstream("model unavailable".into());
        assert_eq!(err.to_string(), "model unavailable");
        assert_eq!(err.kind(), ErrorKind::Upstream);
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two tones the dashboard knows how to style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    Positive,
    Negative,
}

impl Sentiment {
    /// The literal label the classification service uses for this variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sentiment label exactly as the service returned it.
///
/// The raw string is kept because it is what the dashboard displays. Two
/// views over it exist:
/// - [`SentimentLabel::tone`] is a two-way split on equality with `"Positive"`,
///   so any unexpected label is styled as negative.
/// - [`SentimentLabel::known`] only recognizes the two exact literals and is
///   what the batch summary counts with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SentimentLabel(String);

impl SentimentLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn tone(&self) -> Sentiment {
        if self.0 == Sentiment::Positive.as_str() {
            Sentiment::Positive
        } else {
            Sentiment::Negative
        }
    }

    pub fn known(&self) -> Option<Sentiment> {
        match self.0.as_str() {
            "Positive" => Some(Sentiment::Positive),
            "Negative" => Some(Sentiment::Negative),
            _ => None,
        }
    }
}

impl From<Sentiment> for SentimentLabel {
    fn from(sentiment: Sentiment) -> Self {
        Self(sentiment.as_str().to_string())
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One item to classify. Serialized as `{ "text": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationRequest {
    pub text: String,
}

impl ClassificationRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Per-class probabilities. Expected, but not enforced, to sum to about 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Probabilities {
    pub negative: f64,
    pub positive: f64,
}

/// Response body of `POST <base>/predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub text: String,
    pub sentiment: SentimentLabel,
    /// Probability of the predicted label, in `[0, 1]`.
    pub confidence: f64,
    pub probabilities: Probabilities,
    /// Percentage of tokens the model recognized, as reported by the service.
    pub vocab_coverage: f64,
}

/// One element of the `POST <base>/batch-predict` response.
///
/// The service sends full results per item; only these three fields are read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchItem {
    pub text: String,
    pub sentiment: SentimentLabel,
    pub confidence: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_result_deserializes_from_service_body() {
        let body = r#"{
            "text": "Great service",
            "sentiment": "Positive",
            "confidence": 0.87,
            "probabilities": {"positive": 0.87, "negative": 0.13},
            "vocab_coverage": 64.2
        }"#;
        let result: ClassificationResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.sentiment.as_str(), "Positive");
        assert_eq!(result.probabilities.negative, 0.13);
        assert_eq!(result.vocab_coverage, 64.2);
    }

    #[test]
    fn test_batch_item_ignores_extra_fields() {
        let body = r#"[
            {"text": "a", "sentiment": "Negative", "confidence": 0.7,
             "probabilities": {"positive": 0.3, "negative": 0.7}, "vocab_coverage": 10.0}
        ]"#;
        let items: Vec<BatchItem> = serde_json::from_str(body).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].sentiment.known(), Some(Sentiment::Negative));
    }

    #[test]
    fn test_unexpected_label_styles_as_negative_but_is_not_counted() {
        let label = SentimentLabel::new("Neutral");
        assert_eq!(label.tone(), Sentiment::Negative);
        assert_eq!(label.known(), None);

        let lowercase = SentimentLabel::new("positive");
        assert_eq!(lowercase.tone(), Sentiment::Negative);
        assert_eq!(lowercase.known(), None);
    }

    #[test]
    fn test_request_serializes_as_text_object() {
        let json = serde_json::to_string(&ClassificationRequest::new("hi")).unwrap();
        assert_eq!(json, r#"{"text":"hi"}"#);
    }
}

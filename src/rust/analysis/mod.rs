//! Client side of the classification contract: wire types, errors and the
//! HTTP client for `/predict` and `/batch-predict`.

pub mod client;
pub mod error;
pub mod types;
pub mod utils;

pub use client::{HttpSentimentApi, Route, SentimentApi, BATCH_PREDICT_PATH, PREDICT_PATH};
pub use error::{AnalysisError, ErrorKind};
pub use types::{
    BatchItem, ClassificationRequest, ClassificationResult, Probabilities, Sentiment,
    SentimentLabel,
};
pub use utils::{percent, split_reviews, word_count};

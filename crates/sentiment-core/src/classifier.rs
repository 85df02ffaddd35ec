//! Classifier adapter over a pluggable inference backend.
//!
//! The backend returns the model's own label vocabulary plus a confidence
//! score. The adapter drops the score and folds the label into
//! [`Sentiment`]: only the exact label `POSITIVE` is positive, every other
//! label (negative, unknown, or differently cased) becomes negative.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::error::SentimentResult;
use crate::model::{AnalysisRequest, AnalysisResult, Prediction, Sentiment};

/// Label emitted by SST-2 style models for the positive class.
pub const POSITIVE_LABEL: &str = "POSITIVE";

/// A pretrained text classification routine.
///
/// Implementations are loaded once and shared read-only across requests.
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    /// Short backend identifier used in logs.
    fn name(&self) -> &str;

    /// Classify `text`, returning the top label and its score.
    async fn predict(&self, text: &str) -> SentimentResult<Prediction>;
}

/// Map a raw model label to a sentiment. Case-sensitive.
pub fn label_to_sentiment(label: &str) -> Sentiment {
    if label == POSITIVE_LABEL {
        Sentiment::Positive
    } else {
        Sentiment::Negative
    }
}

/// Binary sentiment classifier.
#[derive(Clone)]
pub struct SentimentClassifier {
    backend: Arc<dyn InferenceBackend>,
}

impl SentimentClassifier {
    pub fn new(backend: Arc<dyn InferenceBackend>) -> Self {
        Self { backend }
    }

    /// Name of the underlying backend.
    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    /// Classify a text. Backend failures propagate unchanged.
    pub async fn classify(&self, text: &str) -> SentimentResult<Sentiment> {
        let prediction = self.backend.predict(text).await?;
        let sentiment = label_to_sentiment(&prediction.label);

        debug!(
            backend = self.backend.name(),
            label = %prediction.label,
            score = prediction.score,
            %sentiment,
            "Classified text"
        );

        Ok(sentiment)
    }

    /// Classify the request text and echo it back.
    pub async fn analyze(&self, request: AnalysisRequest) -> SentimentResult<AnalysisResult> {
        let sentiment = self.classify(&request.text).await?;
        Ok(AnalysisResult {
            sentiment,
            input_text: request.text,
        })
    }
}

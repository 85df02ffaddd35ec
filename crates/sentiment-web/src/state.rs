//! Application state.

use sentiment_core::SentimentClassifier;
use std::sync::Arc;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<SentimentClassifier>,
}

impl AppState {
    pub fn new(classifier: SentimentClassifier) -> Self {
        Self {
            classifier: Arc::new(classifier),
        }
    }
}

//! Sentiment Core Library
//!
//! Request/response models, the inference backend seam and the classifier
//! adapter that collapses model labels into a two-valued sentiment.

pub mod classifier;
pub mod error;
pub mod model;

pub use classifier::{label_to_sentiment, InferenceBackend, SentimentClassifier, POSITIVE_LABEL};
pub use error::{SentimentError, SentimentResult};
pub use model::{
    AnalysisRequest, AnalysisResult, HealthStatus, Prediction, Sentiment, HEALTH_MESSAGE,
};

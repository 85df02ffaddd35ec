//! Centralized error types for the sentiment service.

use thiserror::Error;

/// Main error type for classification operations.
#[derive(Error, Debug)]
pub enum SentimentError {
    #[error("Inference failed: {0}")]
    Inference(String),

    #[error("Inference backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("Model load failed: {0}")]
    ModelLoad(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for classification operations.
pub type SentimentResult<T> = Result<T, SentimentError>;

impl SentimentError {
    /// Create an inference error.
    pub fn inference(msg: impl Into<String>) -> Self {
        Self::Inference(msg.into())
    }

    /// Create a model load error.
    pub fn model_load(msg: impl Into<String>) -> Self {
        Self::ModelLoad(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

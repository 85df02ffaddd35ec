//! Shared inference backend options.

use anyhow::{Context, Result};
use clap::Args;
use sentiment_core::SentimentClassifier;
use sentiment_inference::{
    load_backend, remote::DEFAULT_INFERENCE_URL, BackendConfig, BackendKind, DEFAULT_MODEL,
};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Args, Debug, Clone)]
pub struct BackendArgs {
    /// Inference backend: remote or onnx
    #[arg(long, env = "SENTIMENT_BACKEND", default_value = "remote")]
    pub backend: BackendKind,

    /// Model id served by the remote inference API
    #[arg(long, env = "SENTIMENT_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Base URL of the remote inference API
    #[arg(long, env = "SENTIMENT_INFERENCE_URL", default_value = DEFAULT_INFERENCE_URL)]
    pub inference_url: String,

    /// Bearer token for the remote inference API
    #[arg(long, env = "HF_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Remote request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout_secs: u64,

    /// Directory with model.onnx, tokenizer.json and config.json
    #[arg(long, env = "SENTIMENT_MODEL_DIR")]
    pub model_dir: Option<PathBuf>,
}

impl BackendArgs {
    pub fn to_config(&self) -> BackendConfig {
        BackendConfig {
            kind: self.backend,
            model: self.model.clone(),
            inference_url: self.inference_url.clone(),
            api_token: self.api_token.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            model_dir: self.model_dir.clone(),
        }
    }

    /// Load the configured backend and wrap it in a classifier.
    pub fn build_classifier(&self) -> Result<SentimentClassifier> {
        let backend = load_backend(&self.to_config())
            .with_context(|| format!("Failed to load {} backend", self.backend.as_str()))?;
        tracing::info!(backend = self.backend.as_str(), "Inference backend ready");
        Ok(SentimentClassifier::new(backend))
    }
}

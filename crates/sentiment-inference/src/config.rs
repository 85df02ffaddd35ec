//! Backend selection and construction.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use sentiment_core::{InferenceBackend, SentimentError, SentimentResult};

use crate::remote::{RemoteBackend, DEFAULT_INFERENCE_URL, DEFAULT_TIMEOUT_SECS};

/// Default pretrained sentiment model.
pub const DEFAULT_MODEL: &str = "distilbert-base-uncased-finetuned-sst-2-english";

/// Which inference backend to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    #[default]
    Remote,
    Onnx,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Onnx => "onnx",
        }
    }
}

impl std::str::FromStr for BackendKind {
    type Err = SentimentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "remote" => Ok(Self::Remote),
            "onnx" => Ok(Self::Onnx),
            other => Err(SentimentError::config(format!(
                "unknown backend '{other}' (expected 'remote' or 'onnx')"
            ))),
        }
    }
}

/// Settings for building an inference backend.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub kind: BackendKind,
    /// Model id for the remote backend.
    pub model: String,
    pub inference_url: String,
    pub api_token: Option<String>,
    pub timeout: Duration,
    /// Directory with `model.onnx`, `tokenizer.json` and `config.json`.
    pub model_dir: Option<PathBuf>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            kind: BackendKind::Remote,
            model: DEFAULT_MODEL.to_string(),
            inference_url: DEFAULT_INFERENCE_URL.to_string(),
            api_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            model_dir: None,
        }
    }
}

/// Build the configured backend. Called once at startup.
pub fn load_backend(config: &BackendConfig) -> SentimentResult<Arc<dyn InferenceBackend>> {
    match config.kind {
        BackendKind::Remote => {
            let backend = RemoteBackend::new(
                &config.inference_url,
                &config.model,
                config.api_token.clone(),
                config.timeout,
            )?;
            Ok(Arc::new(backend))
        }
        BackendKind::Onnx => load_onnx(config),
    }
}

#[cfg(feature = "onnx")]
fn load_onnx(config: &BackendConfig) -> SentimentResult<Arc<dyn InferenceBackend>> {
    let dir = config
        .model_dir
        .as_deref()
        .ok_or_else(|| SentimentError::config("the onnx backend requires a model directory"))?;
    Ok(Arc::new(crate::onnx::OnnxBackend::load(dir)?))
}

#[cfg(not(feature = "onnx"))]
fn load_onnx(_config: &BackendConfig) -> SentimentResult<Arc<dyn InferenceBackend>> {
    Err(SentimentError::config(
        "the onnx backend is not compiled in; rebuild with `--features onnx`",
    ))
}

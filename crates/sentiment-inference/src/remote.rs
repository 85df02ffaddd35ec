//! Hugging Face Inference API client for text classification.
//!
//! Posts `{"inputs": text}` to `{base_url}/models/{model}` and reads back the
//! per-label scores. Both the nested (`[[{label, score}, ...]]`) and the flat
//! (`[{label, score}, ...]`) response shapes are accepted.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

use sentiment_core::{InferenceBackend, Prediction, SentimentError, SentimentResult};

/// Default Inference API base URL.
pub const DEFAULT_INFERENCE_URL: &str = "https://router.huggingface.co/hf-inference";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Remote text classification backend.
#[derive(Clone)]
pub struct RemoteBackend {
    base_url: String,
    model: String,
    api_token: Option<String>,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct ClassificationRequest<'a> {
    inputs: &'a str,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ClassificationResponse {
    Nested(Vec<Vec<Prediction>>),
    Flat(Vec<Prediction>),
}

impl ClassificationResponse {
    fn into_candidates(self) -> Vec<Prediction> {
        match self {
            Self::Nested(outer) => outer.into_iter().next().unwrap_or_default(),
            Self::Flat(candidates) => candidates,
        }
    }
}

impl RemoteBackend {
    /// Create a backend for `model` served under `base_url`.
    pub fn new(
        base_url: &str,
        model: &str,
        api_token: Option<String>,
        timeout: Duration,
    ) -> SentimentResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        info!(base_url, model, "Configured remote inference backend");

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_token: api_token.filter(|t| !t.is_empty()),
            client,
        })
    }

    /// Full URL classification requests are sent to.
    pub fn endpoint(&self) -> String {
        format!("{}/models/{}", self.base_url, self.model)
    }
}

#[async_trait]
impl InferenceBackend for RemoteBackend {
    fn name(&self) -> &str {
        "remote"
    }

    async fn predict(&self, text: &str) -> SentimentResult<Prediction> {
        let mut request = self
            .client
            .post(self.endpoint())
            .json(&ClassificationRequest { inputs: text });

        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| SentimentError::BackendUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SentimentError::inference(format!(
                "inference API error ({status}): {body}"
            )));
        }

        let parsed: ClassificationResponse = response.json().await?;
        let candidates = parsed.into_candidates();
        debug!(candidates = candidates.len(), "Received classification scores");

        best_candidate(candidates)
            .ok_or_else(|| SentimentError::inference("inference API returned no labels"))
    }
}

fn best_candidate(candidates: Vec<Prediction>) -> Option<Prediction> {
    candidates
        .into_iter()
        .fold(None, |best: Option<Prediction>, p| match best {
            Some(b) if b.score >= p.score => Some(b),
            _ => Some(p),
        })
}

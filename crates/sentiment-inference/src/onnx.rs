//! ONNX Runtime sequence classifier.
//!
//! Loads an exported `*ForSequenceClassification` model. The model directory
//! must contain `model.onnx`, `tokenizer.json` and `config.json`.

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ort::session::{Session, SessionInputValue};
use ort::value::Tensor;
use tokenizers::Tokenizer;
use tracing::info;

use sentiment_core::{InferenceBackend, Prediction, SentimentError, SentimentResult};

use crate::labels::{top_prediction, LabelMap};

/// Maximum sequence length for BERT-family encoders.
const MAX_LENGTH: usize = 512;

/// Local sentiment classifier running on ONNX Runtime.
pub struct OnnxBackend {
    inner: Arc<Inner>,
}

struct Inner {
    session: Mutex<Session>,
    tokenizer: Tokenizer,
    labels: LabelMap,
    /// DistilBERT exports have no `token_type_ids` input.
    wants_token_type_ids: bool,
}

impl OnnxBackend {
    /// Load a classifier from a model directory.
    pub fn load(model_dir: &Path) -> SentimentResult<Self> {
        let model_path = model_dir.join("model.onnx");
        let tokenizer_path = model_dir.join("tokenizer.json");
        let config_path = model_dir.join("config.json");

        for path in [&model_path, &tokenizer_path, &config_path] {
            if !path.exists() {
                return Err(SentimentError::model_load(format!(
                    "{} not found",
                    path.display()
                )));
            }
        }

        let session = Session::builder()
            .map_err(|e| SentimentError::model_load(format!("session builder: {e}")))?
            .commit_from_file(&model_path)
            .map_err(|e| SentimentError::model_load(format!("create session: {e}")))?;

        let wants_token_type_ids = session
            .inputs()
            .iter()
            .any(|input| input.name() == "token_type_ids");

        let mut tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| SentimentError::model_load(format!("load tokenizer: {e}")))?;
        tokenizer
            .with_truncation(Some(tokenizers::TruncationParams {
                max_length: MAX_LENGTH,
                ..Default::default()
            }))
            .map_err(|e| SentimentError::model_load(format!("set truncation: {e}")))?;

        let labels = LabelMap::from_config_json(&std::fs::read_to_string(&config_path)?)?;

        info!(
            model = %model_path.display(),
            labels = labels.len(),
            wants_token_type_ids,
            "Loaded ONNX classification model"
        );

        Ok(Self {
            inner: Arc::new(Inner {
                session: Mutex::new(session),
                tokenizer,
                labels,
                wants_token_type_ids,
            }),
        })
    }
}

impl Inner {
    fn predict_blocking(&self, text: &str) -> SentimentResult<Prediction> {
        let encoding = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| SentimentError::inference(format!("tokenize: {e}")))?;

        let to_i64 = |xs: &[u32]| xs.iter().map(|&x| x as i64).collect::<Vec<_>>();
        let input_ids = to_i64(encoding.get_ids());
        let attention_mask = to_i64(encoding.get_attention_mask());
        let token_type_ids = to_i64(encoding.get_type_ids());

        let shape = [1i64, input_ids.len() as i64];

        let mut inputs: Vec<(&str, SessionInputValue<'_>)> = vec![
            (
                "input_ids",
                Tensor::from_array((shape, input_ids.into_boxed_slice()))
                    .map_err(ort_err)?
                    .into(),
            ),
            (
                "attention_mask",
                Tensor::from_array((shape, attention_mask.into_boxed_slice()))
                    .map_err(ort_err)?
                    .into(),
            ),
        ];
        if self.wants_token_type_ids {
            inputs.push((
                "token_type_ids",
                Tensor::from_array((shape, token_type_ids.into_boxed_slice()))
                    .map_err(ort_err)?
                    .into(),
            ));
        }

        let mut session = self
            .session
            .lock()
            .map_err(|_| SentimentError::inference("onnx session mutex poisoned"))?;
        let outputs = session.run(inputs).map_err(ort_err)?;

        // Logits: [1, num_labels].
        let (_, logits) = outputs[0].try_extract_tensor::<f32>().map_err(ort_err)?;
        top_prediction(logits, &self.labels)
    }
}

fn ort_err(e: impl std::fmt::Display) -> SentimentError {
    SentimentError::inference(e.to_string())
}

#[async_trait]
impl InferenceBackend for OnnxBackend {
    fn name(&self) -> &str {
        "onnx"
    }

    async fn predict(&self, text: &str) -> SentimentResult<Prediction> {
        let inner = Arc::clone(&self.inner);
        let text = text.to_string();
        tokio::task::spawn_blocking(move || inner.predict_blocking(&text))
            .await
            .map_err(|e| SentimentError::inference(format!("inference task failed: {e}")))?
    }
}

//! # Sentiment Inference
//!
//! Concrete [`InferenceBackend`](sentiment_core::InferenceBackend)
//! implementations.
//!
//! - [`RemoteBackend`]: Hugging Face Inference API compatible endpoint.
//! - `OnnxBackend` (feature `onnx`): local ONNX Runtime sequence classifier.

pub mod config;
pub mod labels;
pub mod remote;

#[cfg(feature = "onnx")]
mod onnx;
#[cfg(feature = "onnx")]
pub use onnx::OnnxBackend;

pub use config::{load_backend, BackendConfig, BackendKind, DEFAULT_MODEL};
pub use remote::RemoteBackend;

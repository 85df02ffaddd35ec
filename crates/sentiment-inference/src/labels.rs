//! Label tables and logit post-processing for sequence classifiers.

use serde::Deserialize;
use std::collections::HashMap;

use sentiment_core::{Prediction, SentimentError, SentimentResult};

/// Subset of a Hugging Face `config.json` needed to name output classes.
#[derive(Debug, Deserialize)]
struct ModelConfig {
    #[serde(default)]
    id2label: HashMap<String, String>,
}

/// Ordered class names, indexed by logit position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMap {
    labels: Vec<String>,
}

impl LabelMap {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// Parse `id2label` from the contents of a `config.json`.
    pub fn from_config_json(json: &str) -> SentimentResult<Self> {
        let config: ModelConfig = serde_json::from_str(json)?;

        let mut indexed = Vec::with_capacity(config.id2label.len());
        for (id, label) in config.id2label {
            let idx: usize = id
                .parse()
                .map_err(|_| SentimentError::model_load(format!("non-numeric id2label key '{id}'")))?;
            indexed.push((idx, label));
        }
        indexed.sort_by_key(|(idx, _)| *idx);

        let mut labels = Vec::with_capacity(indexed.len());
        for (expected, (idx, label)) in indexed.into_iter().enumerate() {
            if idx != expected {
                return Err(SentimentError::model_load(format!(
                    "id2label is not contiguous: missing id {expected}"
                )));
            }
            labels.push(label);
        }

        Ok(Self { labels })
    }

    /// Class name for a logit index; `LABEL_{i}` when the table has no entry.
    pub fn label(&self, idx: usize) -> String {
        self.labels
            .get(idx)
            .cloned()
            .unwrap_or_else(|| format!("LABEL_{idx}"))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Numerically stable softmax.
pub fn softmax(logits: &[f32]) -> Vec<f32> {
    let max = logits.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = logits.iter().map(|x| (x - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

/// Pick the most probable class from raw logits.
pub fn top_prediction(logits: &[f32], labels: &LabelMap) -> SentimentResult<Prediction> {
    if logits.is_empty() {
        return Err(SentimentError::inference("model produced no logits"));
    }

    let probs = softmax(logits);
    let (idx, score) = probs
        .iter()
        .copied()
        .enumerate()
        .fold((0, f32::NEG_INFINITY), |best, (i, p)| if p > best.1 { (i, p) } else { best });

    Ok(Prediction::new(labels.label(idx), score))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SST2_CONFIG: &str = r#"{
        "architectures": ["DistilBertForSequenceClassification"],
        "id2label": {"0": "NEGATIVE", "1": "POSITIVE"},
        "label2id": {"NEGATIVE": 0, "POSITIVE": 1}
    }"#;

    #[test]
    fn test_parse_id2label() {
        let map = LabelMap::from_config_json(SST2_CONFIG).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.label(0), "NEGATIVE");
        assert_eq!(map.label(1), "POSITIVE");
    }

    #[test]
    fn test_missing_id2label_falls_back() {
        let map = LabelMap::from_config_json("{}").unwrap();
        assert!(map.is_empty());
        assert_eq!(map.label(1), "LABEL_1");
    }

    #[test]
    fn test_gap_in_id2label_rejected() {
        let json = r#"{"id2label": {"0": "NEGATIVE", "2": "POSITIVE"}}"#;
        assert!(LabelMap::from_config_json(json).is_err());
    }

    #[test]
    fn test_softmax_sums_to_one() {
        let probs = softmax(&[2.0, -1.0, 0.5]);
        let sum: f32 = probs.iter().sum();
        assert!((sum - 1.0).abs() < 1e-5);
        assert!(probs[0] > probs[2] && probs[2] > probs[1]);
    }

    #[test]
    fn test_top_prediction() {
        let map = LabelMap::from_config_json(SST2_CONFIG).unwrap();
        let pred = top_prediction(&[-4.2, 4.5], &map).unwrap();
        assert_eq!(pred.label, "POSITIVE");
        assert!(pred.score > 0.99);

        let pred = top_prediction(&[3.0, -3.0], &map).unwrap();
        assert_eq!(pred.label, "NEGATIVE");
    }

    #[test]
    fn test_top_prediction_empty_logits() {
        let map = LabelMap::new(vec![]);
        assert!(top_prediction(&[], &map).is_err());
    }
}

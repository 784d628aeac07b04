//! Emotion classifier trait and the Hugging Face inference implementation.
//!
//! The hosted model (`j-hartmann/emotion-english-distilroberta-base`) returns
//! one score per emotion label; we keep the trait small so tests and offline
//! deployments can swap in a canned classifier.

use async_trait::async_trait;
use dementiaide_config::AdviceConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("API error [{status}]: {message}")]
    ApiError { status: u16, message: String },
    #[error("Classifier unavailable: {0}")]
    Unavailable(String),
}

/// A single label/confidence pair as returned by the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionScore {
    pub label: String,
    pub score: f32,
}

#[async_trait]
pub trait EmotionClassifier: Send + Sync {
    /// Classify `text`, returning scores sorted by descending confidence.
    async fn classify(&self, text: &str) -> Result<Vec<EmotionScore>, ClassifierError>;
    fn model_id(&self) -> &str;
}

// ── Hugging Face hosted inference ────────────────────────────────────────────

pub struct HfClassifier {
    base_url: String,
    model: String,
    api_key: Option<SecretString>,
    client: reqwest::Client,
}

impl HfClassifier {
    pub fn new(config: &AdviceConfig, api_key: Option<SecretString>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .unwrap_or_default();
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
            client,
        }
    }

    fn auth(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(k) => req.bearer_auth(k.expose_secret()),
            None => req,
        }
    }
}

#[async_trait]
impl EmotionClassifier for HfClassifier {
    async fn classify(&self, text: &str) -> Result<Vec<EmotionScore>, ClassifierError> {
        let url = format!("{}/models/{}", self.base_url, self.model);
        let body = serde_json::json!({ "inputs": text });

        let resp = self.auth(self.client.post(&url)).json(&body).send().await?;
        let status = resp.status().as_u16();
        let json: serde_json::Value = resp.json().await?;

        if status >= 400 {
            let message = json["error"]
                .as_str()
                .unwrap_or("unknown API error")
                .to_string();
            return Err(ClassifierError::ApiError { status, message });
        }

        // Single-input requests come back as [[{label, score}, ...]];
        // some deployments flatten to [{label, score}, ...].
        let raw = match json.as_array() {
            Some(outer) if outer.first().map(|v| v.is_array()).unwrap_or(false) => {
                outer[0].clone()
            }
            Some(_) => json.clone(),
            None => {
                return Err(ClassifierError::Unavailable(format!(
                    "unexpected response shape from {}",
                    self.model
                )))
            }
        };

        let mut scores: Vec<EmotionScore> = serde_json::from_value(raw)?;
        scores.sort_by(|a, b| b.score.total_cmp(&a.score));
        Ok(scores)
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

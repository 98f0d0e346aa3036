//! Client for the hosted embedding-inference API.

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::Deserialize;

use crate::config::Settings;

/// Whether a text is embedded for storage or for search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Passage,
    Query,
}

impl InputType {
    fn as_str(self) -> &'static str {
        match self {
            Self::Passage => "passage",
            Self::Query => "query",
        }
    }
}

/// HTTP client producing one float vector per input string.
#[derive(Clone)]
pub struct EmbeddingClient {
    http: Client,
    base: String,
    api_key: String,
    model: String,
}

impl EmbeddingClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let http = Client::builder()
            .user_agent("medkb-assistant/0.1")
            .build()?;
        Ok(Self {
            http,
            base: settings.store_api_base.clone(),
            api_key: settings.store_api_key.clone(),
            model: settings.embed_model.clone(),
        })
    }

    /// Embed a batch of texts. Inputs past the model's window are truncated
    /// at the end, matching the ingestion side's policy.
    pub async fn embed(&self, inputs: &[String], input_type: InputType) -> Result<Vec<Vec<f32>>> {
        let body = serde_json::json!({
            "model": self.model,
            "parameters": {"input_type": input_type.as_str(), "truncate": "END"},
            "inputs": inputs
                .iter()
                .map(|text| serde_json::json!({"text": text}))
                .collect::<Vec<_>>(),
        });
        let url = format!("{}/embed", self.base);
        let resp: EmbedResponse = self
            .http
            .post(&url)
            .header("Api-Key", &self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("decoding embedding response")?;
        Ok(resp.data.into_iter().map(|d| d.values).collect())
    }

    /// Embed one stored text.
    pub async fn embed_passage(&self, text: &str) -> Result<Vec<f32>> {
        self.embed_one(text, InputType::Passage).await
    }

    /// Embed one search text.
    pub async fn embed_query(&self, text: &str) -> Result<Vec<f32>> {
        self.embed_one(text, InputType::Query).await
    }

    async fn embed_one(&self, text: &str, input_type: InputType) -> Result<Vec<f32>> {
        let mut vectors = self.embed(&[text.to_string()], input_type).await?;
        if vectors.is_empty() {
            bail!("embedding response contained no vectors");
        }
        Ok(vectors.swap_remove(0))
    }
}

#[derive(Debug, Deserialize)]
struct EmbedResponse {
    #[serde(default)]
    data: Vec<EmbedData>,
}

#[derive(Debug, Deserialize)]
struct EmbedData {
    values: Vec<f32>,
}

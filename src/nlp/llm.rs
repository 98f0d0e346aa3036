//! Chat-completion client turning free-text notes into graph markup.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, OneOrMany};
use thiserror::Error;
use tracing::warn;

use crate::config::Settings;

/// Instructions sent with every extraction request. The model must answer
/// with JSON under a top-level `markup` key.
const SYSTEM_PROMPT: &str = r#"Given medical notes, break them up into a directed graph of entities and relationships.
- If the note uses an acronym for an entity, use the acronym as the entity id; do not invent acronyms. Keep longer names in the `synonyms` property.
- Do not shorten multi-word names to the point that they lose meaning (never reduce "calcium gluconate" to "calcium").
- Anything that reads as a definition, meaning, purpose, or explanation belongs in the entity's `details` property. Add no context that is not in the text.
- Prefer these relationship names when they fit: IS_TREATED_WITH, IS_ASSOCIATED_WITH, HAS_SIGN, IS_SIGN_OF, HAS_SYMPTOM, IS_SYMPTOM_OF, HAS_COMPLICATION, IS_TRIGGERED_BY, TRIGGERS, HAS_MNEMONIC, HAS_RISK_FACTOR, IS_RISK_FACTOR_FOR, CAN_BE_SCORED_USING. Otherwise choose the best fitting name.
- If entities are implied but not described (e.g. "signs and symptoms" without detail), skip them; the data is missing.
- When defining a relationship, the entry id must match the source entity name.
- Escape apostrophes in field values.
- The output MUST be JSON of the shape {"markup": [{"id": ..., "values": {"name": ..., "synonyms": [...], "details": ..., "relationship": ..., "source": ..., "target": ...}}]}."#;

/// Failures in the shape of the model's reply.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("chat response content is empty")]
    EmptyResponse,
    #[error("chat response has no top-level `markup` key")]
    MissingMarkup,
    #[error("chat response is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// One extracted entity entry from the model's `markup` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkupRecord {
    pub id: String,
    pub values: MarkupValues,
}

/// Entity properties; relationship fields arrive as a string or an array.
#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarkupValues {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub details: String,
    #[serde_as(as = "OneOrMany<_>")]
    #[serde(default)]
    pub relationship: Vec<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde_as(as = "OneOrMany<_>")]
    #[serde(default)]
    pub target: Vec<String>,
}

static CODE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^```(?:json)?\s*(.*?)\s*```$").expect("valid regex"));

/// Strip a surrounding code fence and undo escaped apostrophes.
pub fn sanitize_content(raw: &str) -> String {
    let trimmed = raw.trim();
    let body = match CODE_FENCE.captures(trimmed) {
        Some(caps) => caps.get(1).map_or(trimmed, |m| m.as_str()),
        None => trimmed,
    };
    body.replace("\\'", "'")
}

/// Parse sanitized chat output into markup records.
///
/// Entries that do not carry both `id` and `values` are skipped with a
/// warning rather than failing the whole batch.
pub fn parse_markup(content: &str) -> Result<Vec<MarkupRecord>, LlmError> {
    let content = sanitize_content(content);
    if content.is_empty() {
        return Err(LlmError::EmptyResponse);
    }
    let value: serde_json::Value = serde_json::from_str(&content)?;
    let entries = value
        .get("markup")
        .and_then(|m| m.as_array())
        .ok_or(LlmError::MissingMarkup)?;

    let mut records = Vec::with_capacity(entries.len());
    for entry in entries {
        match serde_json::from_value::<MarkupRecord>(entry.clone()) {
            Ok(record) => records.push(record),
            Err(err) => warn!(%err, "skipping malformed markup entry"),
        }
    }
    Ok(records)
}

/// HTTP client for an OpenAI-compatible chat-completions endpoint.
#[derive(Clone)]
pub struct ChatClient {
    http: Client,
    base: String,
    api_key: String,
    model: String,
}

impl ChatClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let http = Client::builder()
            .user_agent("medkb-assistant/0.1")
            .build()?;
        Ok(Self {
            http,
            base: settings.chat_api_base.clone(),
            api_key: settings.chat_api_key.clone(),
            model: settings.chat_model.clone(),
        })
    }

    /// Ask the model to mark up `notes` and parse its reply.
    pub async fn extract(&self, notes: &str) -> Result<Vec<MarkupRecord>> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": notes},
            ],
        });
        let url = format!("{}/chat/completions", self.base);
        let resp: ChatCompletion = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("decoding chat completion")?;

        let content = resp
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default();
        Ok(parse_markup(&content)?)
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

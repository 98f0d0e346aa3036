//! Natural language processing orchestration layer.

pub mod embeddings;
pub mod llm;
pub mod ner;
pub mod spans;

use anyhow::Result;
use tracing::info;

use crate::config::Settings;

/// Run LLM markup extraction over raw notes.
pub async fn extract_markup(settings: &Settings, notes: &str) -> Result<Vec<llm::MarkupRecord>> {
    info!(chars = notes.len(), "starting markup extraction");
    let client = llm::ChatClient::new(settings)?;
    client.extract(notes).await
}

/// Run the token classifier over raw notes and merge tags into spans.
pub async fn extract_spans(settings: &Settings, notes: &str) -> Result<Vec<spans::EntitySpan>> {
    info!(chars = notes.len(), "starting span extraction");
    let tagger = ner::load_tagger(settings).await?;
    let tagged = tagger.tag(notes);
    Ok(spans::merge(&tagged))
}

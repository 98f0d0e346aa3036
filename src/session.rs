//! Per-session selection state and ingestion flows.
//!
//! Selection is explicit state owned by one interactive session and passed
//! into the handlers that need it; nothing here is process-global.

use anyhow::Result;
use tracing::info;
use uuid::Uuid;

use crate::{
    config::Settings,
    nlp::{embeddings::EmbeddingClient, llm::MarkupRecord, spans::EntitySpan},
    store::{metadata, metadata::MetadataRecord, VectorStore},
};

/// Entity type whose first selected span names the stored record.
const ID_ENTITY_TYPE: &str = "DISEASE_DISORDER";

/// Spans a user has ticked for persistence. Cleared after a successful upsert.
#[derive(Debug, Default, Clone)]
pub struct Selection {
    items: Vec<EntitySpan>,
}

impl Selection {
    pub fn new(items: Vec<EntitySpan>) -> Self {
        Self { items }
    }

    /// Add the span if absent, remove it if present (checkbox semantics).
    pub fn toggle(&mut self, span: EntitySpan) {
        match self.items.iter().position(|s| *s == span) {
            Some(idx) => {
                self.items.remove(idx);
            }
            None => self.items.push(span),
        }
    }

    pub fn contains(&self, span: &EntitySpan) -> bool {
        self.items.contains(span)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[EntitySpan] {
        &self.items
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Result of persisting one selection.
#[derive(Debug, Clone, serde::Serialize)]
pub struct IngestOutcome {
    pub id: String,
    pub metadata: MetadataRecord,
}

/// Comma-joined text of all selected spans, embedded as one passage.
pub fn combined_text(spans: &[EntitySpan]) -> String {
    spans
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Stored id for a selection: the first disease/disorder span if present,
/// otherwise a fresh UUID.
pub fn choose_id(spans: &[EntitySpan]) -> String {
    spans
        .iter()
        .find(|s| s.entity_type == ID_ENTITY_TYPE)
        .map(|s| s.text.clone())
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

/// Persist a selection of merged spans: embed the combined text, merge the
/// new (type, text) pairs into any previously stored metadata, and upsert.
/// The selection is cleared only after the upsert succeeds.
pub async fn ingest_spans(
    settings: &Settings,
    store: &VectorStore,
    embedder: &EmbeddingClient,
    selection: &mut Selection,
) -> Result<Option<IngestOutcome>> {
    if selection.is_empty() {
        return Ok(None);
    }

    let text = combined_text(selection.items());
    let id = choose_id(selection.items());
    let vector = embedder.embed_passage(&text).await?;

    let existing = store.fetch_metadata(&id, &settings.namespace).await?;
    let pairs: Vec<(String, String)> = selection
        .items()
        .iter()
        .map(|s| (s.entity_type.clone(), s.text.clone()))
        .collect();
    let merged = metadata::merge(existing.as_ref(), &pairs);

    store
        .upsert(&id, &vector, merged.to_fields(), &settings.namespace)
        .await?;
    info!(id, pairs = merged.len(), "ingested selection");

    selection.clear();
    Ok(Some(IngestOutcome {
        id,
        metadata: merged,
    }))
}

/// Persist LLM-extracted markup records, one vector per record. The record's
/// entity name is embedded; source/target/relationship details ride along as
/// metadata. Returns the ids upserted.
pub async fn ingest_records(
    settings: &Settings,
    store: &VectorStore,
    embedder: &EmbeddingClient,
    records: &[MarkupRecord],
) -> Result<Vec<String>> {
    let mut ids = Vec::with_capacity(records.len());
    for record in records {
        let id = if record.id.is_empty() {
            Uuid::new_v4().to_string()
        } else {
            record.id.clone()
        };
        let vector = embedder.embed_passage(&record.values.name).await?;
        let fields = serde_json::json!({
            "source": record.values.source.clone().unwrap_or_default(),
            "target": record.values.target.join(", "),
            "relationship": record.values.relationship.join(", "),
            "details": record.values.details.clone(),
            "synonyms": record.values.synonyms.clone(),
        });
        store
            .upsert(&id, &vector, fields, &settings.namespace)
            .await?;
        ids.push(id);
    }
    info!(count = ids.len(), "ingested markup records");
    Ok(ids)
}

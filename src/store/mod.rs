//! Vector index client: upsert, fetch, and nearest-neighbour query.

pub mod metadata;

use std::collections::HashMap;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::Settings;
use self::metadata::MetadataRecord;

/// One nearest-neighbour hit returned by `query`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    pub score: f32,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

/// HTTP client for the namespaced vector index data plane.
#[derive(Clone)]
pub struct VectorStore {
    http: Client,
    host: String,
    api_key: String,
}

impl VectorStore {
    pub fn new(settings: &Settings) -> Result<Self> {
        let http = Client::builder()
            .user_agent("medkb-assistant/0.1")
            .build()?;
        Ok(Self {
            http,
            host: settings.index_host.clone(),
            api_key: settings.store_api_key.clone(),
        })
    }

    /// Insert or replace one vector with its metadata under `namespace`.
    pub async fn upsert(
        &self,
        id: &str,
        values: &[f32],
        fields: serde_json::Value,
        namespace: &str,
    ) -> Result<()> {
        let body = serde_json::json!({
            "vectors": [{"id": id, "values": values, "metadata": fields}],
            "namespace": namespace,
        });
        self.http
            .post(format!("{}/vectors/upsert", self.host))
            .header("Api-Key", &self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()
            .context("upserting vector")?;
        info!(id, namespace, "upserted vector");
        Ok(())
    }

    /// Fetch stored vectors by id. Unknown ids are simply absent from the map.
    pub async fn fetch(
        &self,
        ids: &[String],
        namespace: &str,
    ) -> Result<HashMap<String, StoredVector>> {
        let mut url = format!(
            "{}/vectors/fetch?namespace={}",
            self.host,
            urlencoding::encode(namespace)
        );
        for id in ids {
            url.push_str("&ids=");
            url.push_str(&urlencoding::encode(id));
        }
        let resp: FetchResponse = self
            .http
            .get(&url)
            .header("Api-Key", &self.api_key)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("decoding fetch response")?;
        Ok(resp.vectors)
    }

    /// Fetch the relationship metadata stored for one id, if any.
    pub async fn fetch_metadata(
        &self,
        id: &str,
        namespace: &str,
    ) -> Result<Option<MetadataRecord>> {
        let vectors = self.fetch(&[id.to_string()], namespace).await?;
        Ok(vectors.get(id).and_then(|v| v.metadata.as_ref()).map(|fields| {
            let record = MetadataRecord::from_fields(fields);
            if record.relationships.len() != record.associated_conditions.len() {
                warn!(
                    id,
                    relationships = record.relationships.len(),
                    conditions = record.associated_conditions.len(),
                    "stored metadata sequences drifted; merge truncates to shorter"
                );
            }
            record
        }))
    }

    /// Nearest-neighbour search over `namespace`.
    pub async fn query(
        &self,
        vector: &[f32],
        top_k: usize,
        namespace: &str,
        include_metadata: bool,
    ) -> Result<Vec<Match>> {
        let body = serde_json::json!({
            "vector": vector,
            "topK": top_k,
            "namespace": namespace,
            "includeValues": false,
            "includeMetadata": include_metadata,
        });
        let resp: QueryResponse = self
            .http
            .post(format!("{}/query", self.host))
            .header("Api-Key", &self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
            .context("decoding query response")?;
        Ok(resp.matches)
    }
}

/// Stored vector payload as returned by `fetch`.
#[derive(Debug, Clone, Deserialize)]
pub struct StoredVector {
    pub id: String,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct FetchResponse {
    #[serde(default)]
    vectors: HashMap<String, StoredVector>,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    matches: Vec<Match>,
}

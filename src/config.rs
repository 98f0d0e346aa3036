//! Runtime configuration utilities for medkb-assistant.

use std::env;

use serde::Deserialize;

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Base URL of the OpenAI-compatible chat-completions API.
    pub chat_api_base: String,
    /// API key for the chat-completions API.
    pub chat_api_key: String,
    /// Chat model used for markup extraction.
    pub chat_model: String,
    /// Base URL of the vector-store control plane (hosts the embed endpoint).
    pub store_api_base: String,
    /// Data-plane host of the vector index.
    pub index_host: String,
    /// API key for the vector store.
    pub store_api_key: String,
    /// Embedding model used for passages and queries.
    pub embed_model: String,
    /// Namespace under which entity ids are unique.
    pub namespace: String,
    /// Default number of nearest neighbours fetched per query.
    pub top_k: usize,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let chat_api_base =
            env::var("CHAT_API_BASE").unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
        let chat_api_key = env::var("CHAT_API_KEY").unwrap_or_default();
        let chat_model =
            env::var("CHAT_MODEL").unwrap_or_else(|_| "gpt-4o-2024-08-06".to_string());
        let store_api_base =
            env::var("STORE_API_BASE").unwrap_or_else(|_| "https://api.pinecone.io".to_string());
        let index_host = env::var("INDEX_HOST").unwrap_or_default();
        let store_api_key = env::var("STORE_API_KEY").unwrap_or_default();
        let embed_model =
            env::var("EMBED_MODEL").unwrap_or_else(|_| "multilingual-e5-large".to_string());
        let namespace = env::var("NAMESPACE").unwrap_or_else(|_| "case-study".to_string());
        let top_k = env::var("TOP_K")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(4);

        Ok(Self {
            chat_api_base,
            chat_api_key,
            chat_model,
            store_api_base,
            index_host,
            store_api_key,
            embed_model,
            namespace,
            top_k,
        })
    }
}

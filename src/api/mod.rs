//! HTTP layer exposing extraction, ingestion, and graph queries.

pub mod routes;
pub mod types;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{
    config::Settings,
    nlp::{embeddings::EmbeddingClient, llm::ChatClient, ner},
    store::VectorStore,
};

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub chat: ChatClient,
    pub embedder: EmbeddingClient,
    pub store: VectorStore,
    pub tagger: Arc<dyn ner::Tagger>,
}

pub async fn serve(settings: Settings, host: String, port: u16) -> Result<()> {
    let state = AppState {
        chat: ChatClient::new(&settings)?,
        embedder: EmbeddingClient::new(&settings)?,
        store: VectorStore::new(&settings)?,
        tagger: ner::load_tagger(&settings).await?,
        settings,
    };
    let router = Router::new()
        .route("/extract", post(routes::extract_markup))
        .route("/ner", post(routes::extract_spans))
        .route("/ingest", post(routes::ingest))
        .route("/query", get(routes::query))
        .route("/graph", get(routes::graph))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    info!(%addr, "serving medkb-assistant API");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}

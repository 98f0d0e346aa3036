use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::{
    config::Settings, graph, nlp::embeddings::EmbeddingClient, store::VectorStore,
};

#[derive(Debug, Parser)]
pub struct Args {
    /// Query text seeding the graph.
    pub text: String,
    /// Number of nearest neighbours to expand.
    #[arg(long)]
    pub top_k: Option<usize>,
    /// Output path for the graph document.
    #[arg(long, default_value = "graph.json")]
    pub out: PathBuf,
}

pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let embedder = EmbeddingClient::new(&settings)?;
    let store = VectorStore::new(&settings)?;
    let vector = embedder.embed_query(&args.text).await?;
    let top_k = args.top_k.unwrap_or(settings.top_k);
    let matches = store
        .query(&vector, top_k, &settings.namespace, true)
        .await?;

    let doc = graph::build(&matches);
    std::fs::write(&args.out, serde_json::to_string_pretty(&doc)?)?;
    info!(
        path = %args.out.display(),
        nodes = doc.nodes.len(),
        edges = doc.edges.len(),
        "wrote graph document"
    );
    Ok(())
}

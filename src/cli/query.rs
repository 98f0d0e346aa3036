use anyhow::Result;
use clap::Parser;

use crate::{config::Settings, nlp::embeddings::EmbeddingClient, store::VectorStore};

#[derive(Debug, Parser)]
pub struct Args {
    /// Query text.
    pub text: String,
    /// Number of nearest neighbours to return.
    #[arg(long)]
    pub top_k: Option<usize>,
}

pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let embedder = EmbeddingClient::new(&settings)?;
    let store = VectorStore::new(&settings)?;
    let vector = embedder.embed_query(&args.text).await?;
    let top_k = args.top_k.unwrap_or(settings.top_k);
    let matches = store
        .query(&vector, top_k, &settings.namespace, false)
        .await?;
    for hit in matches {
        println!("{} with a score of {:.4}", hit.id, hit.score);
    }
    Ok(())
}

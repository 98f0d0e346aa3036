use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    config::Settings,
    nlp::{embeddings::EmbeddingClient, spans::EntitySpan},
    session::{self, Selection},
    store::VectorStore,
};

#[derive(Debug, Parser)]
pub struct Args {
    /// JSON file holding the selected spans ([{"entity_type", "text"}, ...]).
    #[arg(long)]
    pub selection: PathBuf,
}

pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let raw = std::fs::read_to_string(&args.selection)
        .with_context(|| format!("reading {}", args.selection.display()))?;
    let spans: Vec<EntitySpan> = serde_json::from_str(&raw).context("parsing selection file")?;

    let store = VectorStore::new(&settings)?;
    let embedder = EmbeddingClient::new(&settings)?;
    let mut selection = Selection::new(spans);

    match session::ingest_spans(&settings, &store, &embedder, &mut selection).await? {
        Some(outcome) => println!(
            "upserted {} with {} relationship pairs",
            outcome.id,
            outcome.metadata.len()
        ),
        None => println!("selection is empty; nothing to ingest"),
    }
    Ok(())
}

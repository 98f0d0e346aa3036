//! Command-line interface wiring for medkb-assistant.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;

pub mod extract;
pub mod graph;
pub mod ingest;
pub mod ner;
pub mod query;
pub mod serve;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Medical knowledge capture assistant", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Extract(args) => extract::run(args, settings).await,
            Commands::Ner(args) => ner::run(args, settings).await,
            Commands::Ingest(args) => ingest::run(args, settings).await,
            Commands::Query(args) => query::run(args, settings).await,
            Commands::Graph(args) => graph::run(args, settings).await,
            Commands::Serve(args) => serve::run(args, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract entity/relationship markup from notes via the chat model.
    Extract(extract::Args),
    /// Tag notes with the NER pipeline and merge spans.
    Ner(ner::Args),
    /// Upsert a selection of spans into the vector index.
    Ingest(ingest::Args),
    /// Nearest-neighbour search over stored entities.
    Query(query::Args),
    /// Query and emit a force-directed graph document.
    Graph(graph::Args),
    /// Serve the JSON API.
    Serve(serve::Args),
}

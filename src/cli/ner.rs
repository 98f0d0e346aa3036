use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{cli::extract::read_notes, config::Settings, nlp};

#[derive(Debug, Parser)]
pub struct Args {
    /// Notes to tag; omit to read from --file.
    pub notes: Option<String>,
    /// Read notes from a file instead.
    #[arg(long)]
    pub file: Option<PathBuf>,
}

pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let notes = read_notes(args.notes, args.file)?;
    let spans = nlp::extract_spans(&settings, &notes).await?;
    for span in &spans {
        println!("{}\t{}", span.entity_type, span.text);
    }
    println!("{} spans", spans.len());
    Ok(())
}

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

use crate::{config::Settings, nlp};

#[derive(Debug, Parser)]
pub struct Args {
    /// Notes to extract from; omit to read from --file.
    pub notes: Option<String>,
    /// Read notes from a file instead.
    #[arg(long)]
    pub file: Option<PathBuf>,
}

pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let notes = read_notes(args.notes, args.file)?;
    let records = nlp::extract_markup(&settings, &notes).await?;
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}

pub(crate) fn read_notes(inline: Option<String>, file: Option<PathBuf>) -> Result<String> {
    match (inline, file) {
        (Some(notes), _) => Ok(notes),
        (None, Some(path)) => Ok(std::fs::read_to_string(path)?),
        (None, None) => bail!("provide notes inline or via --file"),
    }
}

use anyhow::Result;
use clap::Parser;

use crate::{api, config::Settings};

#[derive(Debug, Parser)]
pub struct Args {
    /// Interface to bind.
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
    /// Port to bind.
    #[arg(long, default_value_t = 8080)]
    pub port: u16,
}

pub async fn run(args: Args, settings: Settings) -> Result<()> {
    api::serve(settings, args.host, args.port).await
}

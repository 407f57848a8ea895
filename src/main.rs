use anyhow::Result;
use clap::Parser;

use insight::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    insight::app::dispatch(cli).await
}

use anyhow::Result;
use clap::Parser;
use forecast_series::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    forecast_series::run(cli).await
}

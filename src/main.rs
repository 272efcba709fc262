use anyhow::Result;
use clap::Parser;
use weather_dash::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    weather_dash::run(cli).await
}

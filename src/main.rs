use clap::Parser;
use hotel_reservation::cli::{self, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cli::serve::run(Cli::parse()).await
}

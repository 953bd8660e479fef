//! Shoyu - builds and publishes container images with makisu.

use anyhow::Result;
use clap::Parser;
use tracing::info;

mod args;
mod logging;

use args::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(&cli.log_level);

    println!("shoyu {}", env!("CARGO_PKG_VERSION"));
    info!(code = env!("CARGO_PKG_REPOSITORY"), "shoyu makisu plugin");

    cli.run()
}

//! sitesnap - full-page competitor screenshot capture.
//!
//! Entry point: parse arguments, initialize logging, run the capture loop
//! over the static target list.

use clap::Parser;
use sitesnap_cli::{capture, cli, logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);

    capture::run(&args).await?;

    Ok(())
}

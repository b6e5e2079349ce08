//! bam - Bash Alias Manager

use clap::Parser;
use std::process::exit;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use bam::cli::{commands, Cli};

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let layer = fmt::layer().compact().with_writer(std::io::stderr);
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry().with(layer).with(filter).init();

    if let Err(err) = commands::execute(&cli) {
        error!("{err:#}");
        exit(1);
    }
}

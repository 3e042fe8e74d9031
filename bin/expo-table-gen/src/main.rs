//! Generator for the significand threshold tables used by lookup-table index mappings.
//!
//! Writes the table for the requested scale to standard output, as a Rust module that can be embedded in
//! `expo-mapping`. Logs go to standard error.

#![deny(warnings)]
#![deny(missing_docs)]

use anyhow::{Context as _, Result};
use clap::Parser as _;
use tracing::{error, info};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

mod config;
use self::config::{Cli, GeneratorConfiguration};

mod generate;
use self::generate::generate;

mod progress;

mod render;
use self::render::render;

fn main() {
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(true)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => info!("expo-table-gen stopped."),
        Err(e) => {
            error!("{:?}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = GeneratorConfiguration::load(&cli).context("Failed to load configuration.")?;
    let workers = config.workers();

    info!(
        scale = cli.scale,
        method = ?config.method,
        workers = workers.get(),
        progress_interval = ?config.progress_interval(),
        "expo-table-gen starting..."
    );

    let thresholds = generate(cli.scale, config.method, workers, config.progress_interval())?;

    let mut stdout = std::io::stdout().lock();
    render(&mut stdout, cli.scale, &thresholds).context("Failed to write table to standard output.")?;

    Ok(())
}

//! qrgen desktop entrypoint

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use clap::Parser;
use qrgen::{QrgenConfig, app, logging};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "qrgen", version, about = "Type some text, get a QR code")]
struct Cli {
    /// Optional configuration file (toml/yaml). Defaults to qrgen.{toml,yaml} in cwd/XDG config.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the log level / filter directive (e.g. `debug`, `qrgen=trace`)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = QrgenConfig::load(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    logging::init(&config.logging)?;
    info!(render = ?config.render, "Starting qrgen");

    app::run(&config)?;
    Ok(())
}

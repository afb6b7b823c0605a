use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

mod shell;

use sketchpad::Config;

#[derive(Parser, Debug)]
#[command(name = "sketchpad")]
#[command(version, about = "Educational shape drawing canvas")]
struct Cli {
    /// Load configuration from this file instead of the default location
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("invalid config override {}", path.display()))?,
        None => Config::load().context("failed to load configuration")?,
    };

    log::info!(
        "sketchpad {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("SKETCHPAD_GIT_HASH")
    );

    shell::run(config).map_err(|err| anyhow::anyhow!("window shell exited with an error: {err}"))?;

    Ok(())
}

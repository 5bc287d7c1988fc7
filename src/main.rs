use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tile_expander::models::{ExpandConfig, ExpandMode};
use tile_expander::services::TilePipeline;

#[derive(Parser)]
#[command(name = "tile-expander")]
#[command(about = "Expand a wplace tile (<PREFIX>_orig.png) into overlay PNGs", version)]
struct Cli {
    /// Tile path without the `_orig.png` suffix (e.g. 1024/717)
    prefix: PathBuf,

    /// Overlay to produce (overrides the config file)
    #[arg(short, long, value_enum)]
    mode: Option<ExpandMode>,

    /// YAML config file (defaults to $TILE_CONFIG)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tile_expander=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config_file = cli
        .config
        .or_else(|| std::env::var("TILE_CONFIG").ok().map(PathBuf::from));
    let mut config =
        ExpandConfig::load(config_file.as_deref()).context("loading configuration")?;

    if let Some(dir) = std::env::var("GLYPH_DIR").ok().map(PathBuf::from) {
        config.glyph_dir = dir;
    }
    if let Some(mode) = cli.mode {
        config.mode = mode;
    }

    tracing::debug!(
        mode = config.mode.as_str(),
        glyph_dir = %config.glyph_dir.display(),
        optimize = config.optimize,
        "Configuration resolved"
    );

    let pipeline = TilePipeline::new(config).context("invalid configuration")?;
    let report = pipeline
        .run(&cli.prefix)
        .with_context(|| format!("processing tile {}", cli.prefix.display()))?;

    for out in &report.outputs {
        println!(
            "Wrote {} ({}x{}, {} bytes)",
            out.path.display(),
            out.size,
            out.size,
            out.bytes
        );
    }

    Ok(())
}

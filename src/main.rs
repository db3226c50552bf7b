use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use sketchboard::config::SketchConfig;
use sketchboard::script::{self, ScriptEvent};
use sketchboard::sketch::Sketch;

#[derive(Parser, Debug)]
#[command(name = "sketchboard")]
#[command(version, about = "Layered raster sketching engine with pen and shape tools")]
struct Cli {
    /// Optional TOML configuration file (sizes, colors, panel placement)
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// JSON pointer script to replay
    #[arg(long, short = 's', value_name = "FILE")]
    script: PathBuf,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 640)]
    width: i32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 480)]
    height: i32,

    /// Output PNG file
    #[arg(long, short = 'o', value_name = "FILE")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SketchConfig::load_from(path)?,
        None => SketchConfig::default(),
    };

    let script_str = fs::read_to_string(&cli.script)
        .with_context(|| format!("Failed to read script from {}", cli.script.display()))?;
    let events: Vec<ScriptEvent> = serde_json::from_str(&script_str)
        .with_context(|| format!("Failed to parse script from {}", cli.script.display()))?;

    let mut sketch = Sketch::new(config, cli.width, cli.height)
        .with_context(|| format!("Failed to create {}x{} canvas", cli.width, cli.height))?;

    log::info!(
        "Replaying {} events onto a {}x{} canvas",
        events.len(),
        cli.width,
        cli.height
    );
    script::run_script(&mut sketch, &events).context("Script replay failed")?;

    let png = sketch.png_bytes().context("Failed to encode PNG")?;
    fs::write(&cli.output, png)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    log::info!("Wrote {}", cli.output.display());
    Ok(())
}

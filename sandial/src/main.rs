//! Sandial command-line entry point
//!
//! Draws the clock face for a given (or the current) time with
//! simulated axis drivers and writes the traced path as an SVG file
//! named `clock_HH_MM.svg`, the scheme the display front end expects.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, Timelike};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sandial_control::{ClockSketch, SimulatedAxis, SketchController};
use sandial_core::config::SandialConfig;

#[derive(Debug, Parser)]
#[command(name = "sandial", about = "Sand-table clock plotter")]
struct Cli {
    /// Hour to draw, 0-23 (defaults to the current hour)
    #[arg(long)]
    hour: Option<f64>,

    /// Minute to draw, 0-59 (defaults to the current minute)
    #[arg(long)]
    minute: Option<f64>,

    /// Emit a time-animated replay instead of a static path
    #[arg(long)]
    animated: bool,

    /// Configuration file
    #[arg(long, default_value = "sandial.toml")]
    config: PathBuf,

    /// Directory for the rendered SVG files
    #[arg(long, default_value = "clocks")]
    out_dir: PathBuf,
}

fn load_config(path: &PathBuf) -> Result<SandialConfig> {
    let config = if path.exists() {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))?
    } else {
        SandialConfig::default()
    };
    config.validate().context("validating config")?;
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli.config)?;

    let now = Local::now();
    let hour = cli.hour.unwrap_or(now.hour() as f64);
    let minute = cli.minute.unwrap_or(now.minute() as f64);

    // No hardware driver is wired in; the simulator stands in for the
    // physical axes and the traced path is still recorded faithfully.
    let controller =
        SketchController::new(SimulatedAxis::new(), SimulatedAxis::new(), config.motion);
    let mut sketch = ClockSketch::new(controller, config.face);

    let svg = sketch.refresh_clock(hour, minute, cli.animated)?;

    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("creating {}", cli.out_dir.display()))?;
    let file = cli
        .out_dir
        .join(format!("clock_{:02}_{:02}.svg", hour as u32, minute as u32));
    fs::write(&file, svg).with_context(|| format!("writing {}", file.display()))?;

    info!(path = %file.display(), "clock face written");
    Ok(())
}

//! Demo configuration: an optional JSON file, then command-line overrides.
//!
//! ```json
//! {
//!   "world":  { "width": 800, "height": 600, "tick_interval_ms": 0, "seed": 7 },
//!   "params": { "population_size": 500, "death_rate": 25 }
//! }
//! ```
//!
//! Both sections and every field inside them are optional.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use ep_core::{HeadingSampling, WorldConfig};
use ep_sim::SimParams;
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(name = "outbreak")]
#[command(about = "Run the quarantine-grid outbreak simulation", long_about = None)]
pub struct Args {
    /// JSON file with `world` and `params` sections.
    #[arg(short, long)]
    pub config: Option<String>,

    /// Root seed.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Milliseconds between ticks (0 = as fast as possible).
    #[arg(long)]
    pub tick_ms: Option<u64>,

    #[arg(long)]
    pub width: Option<f64>,

    #[arg(long)]
    pub height: Option<f64>,

    /// Sample all eight headings instead of the legacy seven.
    #[arg(long)]
    pub uniform_headings: bool,

    #[arg(short, long)]
    pub population: Option<f64>,

    #[arg(long)]
    pub unit_box: Option<f64>,

    /// Percent chance of infection per exposed tick.
    #[arg(long)]
    pub infection_probability: Option<f64>,

    #[arg(long)]
    pub infection_radius: Option<f64>,

    /// Percent chance that an expiring infection kills.
    #[arg(long)]
    pub death_rate: Option<f64>,

    /// Ticks an infection lasts.
    #[arg(long)]
    pub sickness_interval: Option<f64>,

    #[arg(long)]
    pub infected: Option<f64>,

    /// Stop after this many ticks even if the outbreak is still running.
    #[arg(short, long, default_value = "1000")]
    pub ticks: u64,

    /// Write every population snapshot to stdout as one JSON line.
    #[arg(long)]
    pub emit_json: bool,

    /// Rows in the final agent table.
    #[arg(long, default_value = "10")]
    pub table_rows: usize,
}

/// Everything the demo feeds the engine.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub world:  WorldConfig,
    pub params: SimParams,
}

impl DemoConfig {
    /// Read `path` when given, otherwise start from defaults, then apply the
    /// command-line overrides in `args`.
    pub fn load(args: &Args) -> Result<Self> {
        let mut cfg = match &args.config {
            Some(path) => Self::from_file(Path::new(path))?,
            None => {
                // Unpaced unless asked otherwise; nobody is watching a canvas.
                let mut cfg = Self::default();
                cfg.world.tick_interval_ms = 0;
                cfg
            }
        };
        cfg.apply(args);
        Ok(cfg)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }

    fn apply(&mut self, args: &Args) {
        let world = &mut self.world;
        if let Some(v) = args.seed {
            world.seed = v;
        }
        if let Some(v) = args.tick_ms {
            world.tick_interval_ms = v;
        }
        if let Some(v) = args.width {
            world.width = v;
        }
        if let Some(v) = args.height {
            world.height = v;
        }
        if args.uniform_headings {
            world.heading_sampling = HeadingSampling::Uniform;
        }

        let params = &mut self.params;
        if let Some(v) = args.population {
            params.population_size = v;
        }
        if let Some(v) = args.unit_box {
            params.unit_box_size = v;
        }
        if let Some(v) = args.infection_probability {
            params.infection_probability = v;
        }
        if let Some(v) = args.infection_radius {
            params.infection_radius = v;
        }
        if let Some(v) = args.death_rate {
            params.death_rate = v;
        }
        if let Some(v) = args.sickness_interval {
            params.sickness_interval = v;
        }
        if args.infected.is_some() {
            params.infected_at_start = args.infected;
        }
    }
}

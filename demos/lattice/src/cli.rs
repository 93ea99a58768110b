//! Command-line arguments and configuration layering.
//!
//! Precedence, lowest first: built-in defaults, the `--config` JSON file,
//! individual flags.  Missing JSON fields keep their defaults.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use epi_core::{Boundary, EpiConfig, Neighborhood};
use log::LevelFilter;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Sqlite,
}

/// Command line arguments for the lattice epidemic simulation
#[derive(Parser, Debug)]
#[command(name = "lattice")]
#[command(about = "SIR-style epidemic on a 2-D lattice with an asymptomatic phase")]
pub struct Args {
    /// JSON configuration file; flags below override its fields
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Lattice side length [default: 100]
    #[arg(long = "L")]
    pub side: Option<u32>,

    /// Probability each cell starts occupied, 0.0 to 1.0 [default: 1.0]
    #[arg(long = "N")]
    pub density: Option<f64>,

    /// Number of steps to simulate [default: 500]
    #[arg(long = "t")]
    pub steps: Option<u64>,

    /// Initially infected agents [default: 1]
    #[arg(long = "n_0")]
    pub initial_infected: Option<usize>,

    /// Per-neighbor, per-step infection probability [default: 0.1]
    #[arg(long = "lam")]
    pub infection_rate: Option<f64>,

    /// Ticks spent asymptomatic; 0 skips the phase [default: 20]
    #[arg(long = "asym_l")]
    pub asymptomatic_ticks: Option<u32>,

    /// Ticks spent symptomatic [default: 20]
    #[arg(long = "symp_l")]
    pub symptomatic_ticks: Option<u32>,

    /// Expected new susceptible arrivals per step [default: 0.0]
    #[arg(long)]
    pub influx: Option<f64>,

    /// Random seed for reproducibility [default: 42]
    #[arg(long)]
    pub seed: Option<u64>,

    /// Lattice edges: open or toroidal [default: open]
    #[arg(long)]
    pub boundary: Option<Boundary>,

    /// Neighborhood: von-neumann or moore [default: von-neumann]
    #[arg(long)]
    pub neighborhood: Option<Neighborhood>,

    /// Write a lattice snapshot every N steps, 0 disables [default: 0]
    #[arg(long)]
    pub snapshot_interval: Option<u64>,

    /// Directory for per-tick counts and lattice snapshots
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Backend used with --out
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    /// Write the full time series as JSON to this file
    #[arg(long)]
    pub series_json: Option<PathBuf>,

    /// Print the final lattice
    #[arg(long)]
    pub show_lattice: bool,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

impl Args {
    /// Resolve the run configuration from defaults, `--config`, and flags.
    pub fn resolve_config(&self) -> Result<EpiConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => EpiConfig::default(),
        };
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut EpiConfig) {
        if let Some(v) = self.side               { config.side = v; }
        if let Some(v) = self.density            { config.density = v; }
        if let Some(v) = self.steps              { config.steps = v; }
        if let Some(v) = self.initial_infected   { config.initial_infected = v; }
        if let Some(v) = self.infection_rate     { config.infection_rate = v; }
        if let Some(v) = self.asymptomatic_ticks { config.asymptomatic_ticks = v; }
        if let Some(v) = self.symptomatic_ticks  { config.symptomatic_ticks = v; }
        if let Some(v) = self.influx             { config.influx = v; }
        if let Some(v) = self.seed               { config.seed = v; }
        if let Some(v) = self.boundary           { config.boundary = v; }
        if let Some(v) = self.neighborhood       { config.neighborhood = v; }
        if let Some(v) = self.snapshot_interval  { config.snapshot_interval = v; }
    }
}

pub fn load_config(path: &Path) -> Result<EpiConfig> {
    let file = File::open(path)
        .with_context(|| format!("opening config {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing config {}", path.display()))
}

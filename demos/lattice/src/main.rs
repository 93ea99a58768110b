//! lattice: command-line driver for the epidemic lattice simulator.
//!
//! Builds a lattice from defaults, an optional JSON config, and flags; runs it;
//! and prints the epidemic curve.  `--out` writes per-tick counts and lattice
//! snapshots through `epi-output`.
//!
//! ```text
//! lattice --L 50 --N 0.8 --t 200 --lam 0.25 --asym_l 5 --symp_l 7 --out output/run1
//! ```

mod cli;
mod logging;


use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use epi_core::{EpiConfig, Tick};
use epi_output::{CsvWriter, OutputWriter, SimOutputObserver};
use epi_sim::{NoopObserver, Sim, SimBuilder, TimeSeries};
use log::{info, warn};

use cli::{Args, OutputFormat};

/// Lattices wider than this are not printed by `--show-lattice`.
const MAX_RENDER_SIDE: u32 = 120;

/// Rows in the printed epidemic curve, excluding the final tick.
const CURVE_ROWS: u64 = 10;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.log_level)?;

    let config = args.resolve_config()?;
    print_header(&config);

    let mut sim = SimBuilder::seeded(config.clone()).build()?;
    println!(
        "Placed {} agents on {} cells",
        sim.network.population(),
        sim.network.lattice().cell_count()
    );
    println!();

    let t0 = Instant::now();
    let series = match &args.out {
        Some(dir) => run_with_output(&mut sim, dir, args.format)?,
        None => sim.run(&mut NoopObserver)?,
    };
    let elapsed = t0.elapsed();

    print_curve(&series);
    println!();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    if let Some((tick, peak)) = series.peak_infectious() {
        println!("  peak infectious : {peak} at {tick}");
    }
    println!("  influx arrivals : {}", sim.network.influx_placed());
    if let Some(dir) = &args.out {
        println!("  output          : {}", dir.display());
    }

    if let Some(path) = &args.series_json {
        write_series_json(&series, path)?;
        println!("  time series     : {}", path.display());
    }

    if args.show_lattice {
        if config.side <= MAX_RENDER_SIDE {
            let snapshot = sim.network.snapshot();
            println!();
            println!("{}", snapshot.render());
            println!("{} at {}", snapshot.counts(), snapshot.tick);
        } else {
            warn!("--show-lattice ignored: side {} exceeds {MAX_RENDER_SIDE}", config.side);
        }
    }

    Ok(())
}

// ── Run helpers ───────────────────────────────────────────────────────────────

fn run_with_output(sim: &mut Sim, dir: &Path, format: OutputFormat) -> Result<TimeSeries> {
    match format {
        OutputFormat::Csv => drive(sim, CsvWriter::new(dir)?),
        #[cfg(feature = "sqlite")]
        OutputFormat::Sqlite => drive(sim, epi_output::SqliteWriter::new(dir)?),
        #[cfg(not(feature = "sqlite"))]
        OutputFormat::Sqlite => anyhow::bail!("this binary was built without the `sqlite` feature"),
    }
}

fn drive<W: OutputWriter>(sim: &mut Sim, writer: W) -> Result<TimeSeries> {
    let mut obs = SimOutputObserver::new(writer);
    let series = sim.run(&mut obs)?;
    if let Some(e) = obs.take_error() {
        return Err(e).context("writing simulation output");
    }
    Ok(series)
}

pub(crate) fn write_series_json(series: &TimeSeries, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), series)?;
    info!("wrote {} records to {}", series.len(), path.display());
    Ok(())
}

// ── Printing ──────────────────────────────────────────────────────────────────

fn print_header(config: &EpiConfig) {
    println!("=== lattice epidemic ===");
    println!(
        "L: {}  |  N: {}  |  t: {}  |  n_0: {}  |  seed: {}",
        config.side, config.density, config.steps, config.initial_infected, config.seed
    );
    println!(
        "lam: {}  |  asym_l: {}  |  symp_l: {}  |  influx: {}",
        config.infection_rate, config.asymptomatic_ticks, config.symptomatic_ticks, config.influx
    );
    println!("{} boundary, {} neighborhood", config.boundary, config.neighborhood);
}

/// Ticks printed in the curve: evenly spaced, always including the last one.
pub(crate) fn curve_ticks(series: &TimeSeries) -> Vec<Tick> {
    let Some(last) = series.len().checked_sub(1) else {
        return Vec::new();
    };
    let last = last as u64;
    let stride = last.div_ceil(CURVE_ROWS).max(1);
    let mut ticks: Vec<Tick> = (0..=last)
        .step_by(stride as usize)
        .map(|i| series.start().offset(i))
        .collect();
    if last % stride != 0 {
        ticks.push(series.start().offset(last));
    }
    ticks
}

fn print_curve(series: &TimeSeries) {
    println!(
        "{:<8} {:>11} {:>12} {:>11} {:>10} {:>10}",
        "Tick", "Susceptible", "Asymptomatic", "Symptomatic", "Recovered", "Total"
    );
    println!("{}", "-".repeat(67));
    for tick in curve_ticks(series) {
        let Some(c) = series.get(tick) else { continue };
        println!(
            "{:<8} {:>11} {:>12} {:>11} {:>10} {:>10}",
            tick.0, c.susceptible, c.asymptomatic, c.symptomatic, c.recovered, c.total()
        );
    }
}

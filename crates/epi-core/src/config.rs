//! Top-level simulation configuration.
//!
//! Typically built by a command-line front end (or loaded from a JSON file with
//! the `serde` feature) and handed to `SimBuilder`.  Missing JSON fields take
//! the values from [`EpiConfig::default`].

use crate::{Boundary, EpiError, EpiResult, Neighborhood};

/// Largest side length whose `side * side` cells still fit a `u32` `CellId`.
pub const MAX_SIDE: u32 = u16::MAX as u32;

/// All parameters of one simulation run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EpiConfig {
    /// Lattice side length `L`; the grid has `L × L` cells.
    pub side: u32,

    /// Probability `N` that each cell is occupied at start, in `[0, 1]`.
    pub density: f64,

    /// Number of steps `t` to simulate.  The time series has `t + 1` records.
    pub steps: u64,

    /// Number `n_0` of agents seeded as Asymptomatic at tick 0.
    pub initial_infected: usize,

    /// Per-neighbor, per-step infection probability `lam`, in `[0, 1]`.
    pub infection_rate: f64,

    /// Ticks spent Asymptomatic before becoming Symptomatic (`asym_l`).
    /// 0 skips the phase entirely.
    pub asymptomatic_ticks: u32,

    /// Ticks spent Symptomatic before Recovering (`symp_l`).
    pub symptomatic_ticks: u32,

    /// Expected number of new Susceptible agents per step.  0 disables influx.
    pub influx: f64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Edge handling of the lattice.
    pub boundary: Boundary,

    /// Neighbor shape used for transmission.
    pub neighborhood: Neighborhood,

    /// Emit a lattice snapshot every N ticks (tick 0 included).  0 = never.
    pub snapshot_interval: u64,
}

impl Default for EpiConfig {
    fn default() -> Self {
        Self {
            side:               100,
            density:            1.0,
            steps:              500,
            initial_infected:   1,
            infection_rate:     0.1,
            asymptomatic_ticks: 20,
            symptomatic_ticks:  20,
            influx:             0.0,
            seed:               42,
            boundary:           Boundary::Open,
            neighborhood:       Neighborhood::VonNeumann,
            snapshot_interval:  0,
        }
    }
}

impl EpiConfig {
    /// Total number of lattice cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.side as usize * self.side as usize
    }

    /// Check every parameter range.  Called by `SimBuilder::build` before any
    /// allocation; a failing configuration is fatal.
    pub fn validate(&self) -> EpiResult<()> {
        if self.side == 0 {
            return Err(EpiError::Config("lattice side L must be at least 1".into()));
        }
        if self.side > MAX_SIDE {
            return Err(EpiError::Config(format!(
                "lattice side L = {} exceeds the maximum of {MAX_SIDE}",
                self.side
            )));
        }
        check_probability("density N", self.density)?;
        check_probability("infection rate lam", self.infection_rate)?;
        if !self.influx.is_finite() || self.influx < 0.0 {
            return Err(EpiError::Config(format!(
                "influx rate must be a non-negative number, got {}",
                self.influx
            )));
        }
        Ok(())
    }
}

fn check_probability(name: &str, value: f64) -> EpiResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(EpiError::Config(format!("{name} must lie in [0, 1], got {value}")))
    }
}

//! The `Sim` struct and its step loop.

use epi_core::{EpiConfig, RandomSource, SimRng, Tick};
use log::info;

use crate::{Network, SimObserver, SimResult, StateCounts, TimeSeries};

/// The main simulation runner.
///
/// `Sim<R>` owns the populated [`Network`] and the random source, and drives
/// [`Network::step`] until `config.steps` steps have completed.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<R: RandomSource = SimRng> {
    /// Run parameters (lattice size, rates, durations, step count, …).
    pub config:  EpiConfig,

    /// Lattice, agents, and the current tick.
    pub network: Network,

    /// The single random stream every draw of the run comes from.
    pub rng:     R,
}

impl<R: RandomSource> Sim<R> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Ticks completed so far.
    pub fn time(&self) -> Tick {
        self.network.time()
    }

    /// Run from the current tick to `config.steps`.
    ///
    /// Returns one record for the current tick plus one per step taken, so a
    /// fresh run yields `steps + 1` records.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<TimeSeries> {
        let end = Tick(self.config.steps);
        let now = self.time();
        info!("running {} → {end}: {}", now, self.network.counts());

        let mut series = TimeSeries::new(now);
        self.record(now, self.network.counts(), &mut series, observer);
        while self.time() < end {
            self.step_once(&mut series, observer)?;
        }
        observer.on_sim_end(self.time());

        if let Some((tick, peak)) = series.peak_infectious() {
            info!("run complete at {}: {} (peak {peak} infectious at {tick})", self.time(), self.network.counts());
        }
        Ok(series)
    }

    /// Run exactly `n` steps from the current tick (ignores `config.steps`).
    ///
    /// Returns one record per step taken.  Useful for tests and incremental
    /// stepping.
    pub fn run_steps<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<TimeSeries> {
        let mut series = TimeSeries::new(self.time().next());
        for _ in 0..n {
            self.step_once(&mut series, observer)?;
        }
        Ok(series)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn step_once<O: SimObserver>(&mut self, series: &mut TimeSeries, observer: &mut O) -> SimResult<()> {
        let tick = self.time().next();
        observer.on_step_start(tick);
        let counts = self.network.step(&mut self.rng)?;
        self.record(tick, counts, series, observer);
        Ok(())
    }

    fn record<O: SimObserver>(
        &self,
        tick:     Tick,
        counts:   StateCounts,
        series:   &mut TimeSeries,
        observer: &mut O,
    ) {
        series.push(counts);
        observer.on_step_end(tick, &counts);
        if tick.is_on_interval(self.config.snapshot_interval) {
            observer.on_snapshot(tick, &self.network);
        }
    }
}

//! Simulation observer trait for progress reporting and data collection.

use epi_core::Tick;

use crate::{Network, StateCounts};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] around each step.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: epidemic-curve printer
///
/// ```rust,ignore
/// struct CurvePrinter;
///
/// impl SimObserver for CurvePrinter {
///     fn on_step_end(&mut self, tick: Tick, counts: &StateCounts) {
///         println!("{tick}: {} infectious", counts.infectious());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before step `tick` runs.
    fn on_step_start(&mut self, _tick: Tick) {}

    /// Called with the counts after step `tick`.  Also called once for
    /// tick 0 with the initial counts before the first step.
    fn on_step_end(&mut self, _tick: Tick, _counts: &StateCounts) {}

    /// Called every `config.snapshot_interval` ticks, tick 0 included.
    ///
    /// Provides read-only access to the full network so output writers can
    /// record a lattice snapshot without the sim knowing the format.
    fn on_snapshot(&mut self, _tick: Tick, _network: &Network) {}

    /// Called once after the final step completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

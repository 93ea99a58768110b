//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use epi_core::Tick;
use epi_sim::{Network, SimObserver, StateCounts};
use log::warn;

use crate::row::{CellSnapshotRow, CountsRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes per-tick counts and lattice snapshots to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!("output write failed, further output may be incomplete: {e}");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_step_end(&mut self, tick: Tick, counts: &StateCounts) {
        let result = self.writer.write_counts(&CountsRow::new(tick, counts));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, _tick: Tick, network: &Network) {
        let rows = CellSnapshotRow::from_snapshot(&network.snapshot());
        if !rows.is_empty() {
            let result = self.writer.write_snapshot(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}

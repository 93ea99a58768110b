//! The `OutputWriter` trait implemented by all backend writers.

use crate::{CellSnapshotRow, CountsRow, OutputResult};

/// Trait implemented by the CSV and SQLite writers.
///
/// All methods are infallible from the observer's perspective: errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one row of aggregate counts.
    fn write_counts(&mut self, row: &CountsRow) -> OutputResult<()>;

    /// Write the occupied cells of one lattice snapshot.
    fn write_snapshot(&mut self, rows: &[CellSnapshotRow]) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

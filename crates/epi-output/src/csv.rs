//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `state_counts.csv`
//! - `lattice_snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{CellSnapshotRow, CountsRow, OutputResult};
use crate::writer::OutputWriter;

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    counts:    Writer<File>,
    snapshots: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create the output directory if needed, open the two CSV files in it,
    /// and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut counts = Writer::from_path(dir.join("state_counts.csv"))?;
        counts.write_record(["tick", "susceptible", "asymptomatic", "symptomatic", "recovered", "total"])?;

        let mut snapshots = Writer::from_path(dir.join("lattice_snapshots.csv"))?;
        snapshots.write_record(["tick", "row", "col", "agent_id", "state"])?;

        Ok(Self { counts, snapshots, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_counts(&mut self, row: &CountsRow) -> OutputResult<()> {
        self.counts.write_record(&[
            row.tick.to_string(),
            row.susceptible.to_string(),
            row.asymptomatic.to_string(),
            row.symptomatic.to_string(),
            row.recovered.to_string(),
            row.total.to_string(),
        ])?;
        Ok(())
    }

    fn write_snapshot(&mut self, rows: &[CellSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.row.to_string(),
                row.col.to_string(),
                row.agent_id.to_string(),
                row.state.as_str().to_owned(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.counts.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}

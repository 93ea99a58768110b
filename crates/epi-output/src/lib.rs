//! `epi-output`: simulation output writers for the lattice epidemic
//! simulator.
//!
//! Two backends are provided:
//!
//! | Feature   | Backend | Files created                                  |
//! |-----------|---------|------------------------------------------------|
//! | *(none)*  | CSV     | `state_counts.csv`, `lattice_snapshots.csv`    |
//! | `sqlite`  | SQLite  | `output.db`                                    |
//!
//! Both implement [`OutputWriter`] and are driven by [`SimOutputObserver`],
//! which implements `epi_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use epi_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs).unwrap();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{CellSnapshotRow, CountsRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;

//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `state_counts` and `lattice_snapshots`.

use std::path::Path;

use rusqlite::Connection;

use crate::{CellSnapshotRow, CountsRow, OutputResult};
use crate::writer::OutputWriter;

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS state_counts (
                 tick         INTEGER PRIMARY KEY,
                 susceptible  INTEGER NOT NULL,
                 asymptomatic INTEGER NOT NULL,
                 symptomatic  INTEGER NOT NULL,
                 recovered    INTEGER NOT NULL,
                 total        INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS lattice_snapshots (
                 tick     INTEGER NOT NULL,
                 row      INTEGER NOT NULL,
                 col      INTEGER NOT NULL,
                 agent_id INTEGER NOT NULL,
                 state    TEXT    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_counts(&mut self, row: &CountsRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO state_counts \
             (tick, susceptible, asymptomatic, symptomatic, recovered, total) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                row.tick as i64,
                row.susceptible as i64,
                row.asymptomatic as i64,
                row.symptomatic as i64,
                row.recovered as i64,
                row.total as i64,
            ],
        )?;
        Ok(())
    }

    fn write_snapshot(&mut self, rows: &[CellSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO lattice_snapshots (tick, row, col, agent_id, state) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.tick as i64,
                    row.row,
                    row.col,
                    row.agent_id,
                    row.state.as_str(),
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}

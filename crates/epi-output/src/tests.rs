//! Integration tests for epi-output.

#[cfg(test)]
mod csv_tests {
    use epi_core::DiseaseState;
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{CellSnapshotRow, CountsRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn counts_row(tick: u64) -> CountsRow {
        CountsRow {
            tick,
            susceptible:  10 - tick,
            asymptomatic: tick,
            symptomatic:  0,
            recovered:    0,
            total:        10,
        }
    }

    fn cell_row(agent_id: u32, tick: u64) -> CellSnapshotRow {
        CellSnapshotRow { tick, row: agent_id / 3, col: agent_id % 3, agent_id, state: DiseaseState::Symptomatic }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("state_counts.csv").exists());
        assert!(dir.path().join("lattice_snapshots.csv").exists());
    }

    #[test]
    fn csv_creates_missing_directory() {
        let dir = tmp();
        let nested = dir.path().join("runs").join("a");
        let _w = CsvWriter::new(&nested).unwrap();
        assert!(nested.join("state_counts.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("state_counts.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["tick", "susceptible", "asymptomatic", "symptomatic", "recovered", "total"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("lattice_snapshots.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["tick", "row", "col", "agent_id", "state"]);
    }

    #[test]
    fn csv_counts_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_counts(&counts_row(0)).unwrap();
        w.write_counts(&counts_row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("state_counts.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][0], "3");  // tick
        assert_eq!(&rows[1][1], "7");  // susceptible
        assert_eq!(&rows[1][2], "3");  // asymptomatic
        assert_eq!(&rows[1][5], "10"); // total
    }

    #[test]
    fn csv_snapshot_states_are_named() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshot(&[cell_row(0, 5), cell_row(4, 5)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("lattice_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][1], "1"); // row
        assert_eq!(&rows[1][2], "1"); // col
        assert_eq!(&rows[1][3], "4"); // agent_id
        assert_eq!(&rows[1][4], "symptomatic");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_snapshot_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshot(&[]).unwrap();
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use epi_core::{EpiConfig, Tick};
    use epi_lattice::Position;
    use epi_sim::{SimBuilder, SimObserver, StateCounts};
    use tempfile::TempDir;

    use crate::row::{CellSnapshotRow, CountsRow};
    use crate::writer::OutputWriter;
    use crate::{CsvWriter, OutputError, OutputResult, SimOutputObserver};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    /// Fails every write; counts calls to `finish`.
    #[derive(Default)]
    struct FailingWriter {
        finished: usize,
    }

    impl OutputWriter for FailingWriter {
        fn write_counts(&mut self, row: &CountsRow) -> OutputResult<()> {
            Err(OutputError::Io(std::io::Error::other(format!("tick {}", row.tick))))
        }

        fn write_snapshot(&mut self, _rows: &[CellSnapshotRow]) -> OutputResult<()> {
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finished += 1;
            Ok(())
        }
    }

    #[test]
    fn first_error_is_kept() {
        let mut obs = SimOutputObserver::new(FailingWriter::default());
        obs.on_step_end(Tick(0), &StateCounts::default());
        obs.on_step_end(Tick(1), &StateCounts::default());
        obs.on_sim_end(Tick(1));

        let err = obs.take_error().unwrap();
        assert!(err.to_string().contains("tick 0"), "{err}");
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().finished, 1);
    }

    #[test]
    fn integration_csv() {
        let config = EpiConfig {
            side:               3,
            density:            1.0,
            steps:              4,
            initial_infected:   1,
            infection_rate:     1.0,
            asymptomatic_ticks: 1,
            symptomatic_ticks:  1,
            snapshot_interval:  2,
            ..EpiConfig::default()
        };
        let mut sim = SimBuilder::seeded(config)
            .initial_infected(vec![Position::new(1, 1)])
            .build()
            .unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        // steps = 4 → ticks 0..=4 → 5 count rows.
        let mut rdr = csv::Reader::from_path(dir.path().join("state_counts.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 5);
        assert_eq!((&rows[1][1], &rows[1][2], &rows[1][3]), ("4", "4", "1"));
        assert!(rows.iter().all(|r| &r[5] == "9"));

        // interval = 2 → snapshots at ticks 0, 2, 4 (3 × 9 occupied cells).
        let mut rdr = csv::Reader::from_path(dir.path().join("lattice_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 27, "expected 3 snapshots × 9 cells, got {}", rows.len());
        let center_t2 = rows
            .iter()
            .find(|r| &r[0] == "2" && &r[1] == "1" && &r[2] == "1")
            .unwrap();
        assert_eq!(&center_t2[4], "recovered");
    }

    #[test]
    fn empty_cells_are_not_written() {
        let config = EpiConfig {
            side:              4,
            density:           0.0,
            initial_infected:  0,
            influx:            2.0,
            steps:             3,
            snapshot_interval: 1,
            ..EpiConfig::default()
        };
        let mut sim = SimBuilder::seeded(config).build().unwrap();
        let dir = tmp();
        let mut obs = SimOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        // 0 + 2 + 4 + 6 occupied cells over ticks 0..=3.
        let mut rdr = csv::Reader::from_path(dir.path().join("lattice_snapshots.csv")).unwrap();
        assert_eq!(rdr.records().count(), 12);
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use epi_core::DiseaseState;
    use tempfile::TempDir;

    use crate::row::{CellSnapshotRow, CountsRow};
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_snapshot_count() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        let rows = vec![
            CellSnapshotRow { tick: 1, row: 0, col: 0, agent_id: 0, state: DiseaseState::Susceptible },
            CellSnapshotRow { tick: 1, row: 0, col: 1, agent_id: 1, state: DiseaseState::Asymptomatic },
            CellSnapshotRow { tick: 1, row: 1, col: 0, agent_id: 2, state: DiseaseState::Recovered },
        ];
        w.write_snapshot(&rows).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM lattice_snapshots", [], |r| r.get(0)
        ).unwrap();
        assert_eq!(count, 3);

        let state: String = conn.query_row(
            "SELECT state FROM lattice_snapshots WHERE agent_id = 2", [], |r| r.get(0)
        ).unwrap();
        assert_eq!(state, "recovered");
    }

    #[test]
    fn sqlite_counts_row() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_counts(&CountsRow {
            tick: 7, susceptible: 5, asymptomatic: 2, symptomatic: 1, recovered: 4, total: 12,
        }).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (s, r, total): (i64, i64, i64) = conn.query_row(
            "SELECT susceptible, recovered, total FROM state_counts WHERE tick = 7",
            [],
            |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
        ).unwrap();
        assert_eq!((s, r, total), (5, 4, 12));
    }

    #[test]
    fn sqlite_finish_idempotent() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

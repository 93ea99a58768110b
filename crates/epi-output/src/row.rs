//! Plain data row types written by output backends.

use epi_core::{DiseaseState, Tick};
use epi_sim::{LatticeSnapshot, StateCounts};

/// Aggregate counts for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountsRow {
    pub tick:         u64,
    pub susceptible:  u64,
    pub asymptomatic: u64,
    pub symptomatic:  u64,
    pub recovered:    u64,
    pub total:        u64,
}

impl CountsRow {
    pub fn new(tick: Tick, counts: &StateCounts) -> Self {
        Self {
            tick:         tick.0,
            susceptible:  counts.susceptible,
            asymptomatic: counts.asymptomatic,
            symptomatic:  counts.symptomatic,
            recovered:    counts.recovered,
            total:        counts.total(),
        }
    }
}

/// One occupied cell at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellSnapshotRow {
    pub tick:     u64,
    pub row:      u32,
    pub col:      u32,
    pub agent_id: u32,
    pub state:    DiseaseState,
}

impl CellSnapshotRow {
    /// Rows for every occupied cell of `snapshot`, row-major.
    pub fn from_snapshot(snapshot: &LatticeSnapshot) -> Vec<Self> {
        snapshot
            .occupied()
            .map(|(pos, cell)| Self {
                tick:     snapshot.tick.0,
                row:      pos.row,
                col:      pos.col,
                agent_id: cell.agent.0,
                state:    cell.state,
            })
            .collect()
    }
}

//! Point-in-time copy of every cell's occupant and state.

use epi_core::{AgentId, DiseaseState, Tick};
use epi_lattice::Position;

use crate::{Network, StateCounts};

/// Occupant of one cell at snapshot time.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellState {
    pub agent: AgentId,
    pub state: DiseaseState,
}

/// Owned, row-major copy of the lattice at `tick`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatticeSnapshot {
    pub tick:  Tick,
    pub side:  u32,
    pub cells: Vec<Option<CellState>>,
}

impl LatticeSnapshot {
    pub fn capture(network: &Network) -> Self {
        let agents = network.agents();
        let cells = network
            .lattice()
            .cells()
            .iter()
            .map(|cell| {
                let agent = cell.occupant?;
                let state = agents.get(agent)?.state();
                Some(CellState { agent, state })
            })
            .collect();
        Self { tick: network.time(), side: network.lattice().side(), cells }
    }

    /// Occupant of `pos`; `None` if the cell is empty or off the lattice.
    pub fn at(&self, pos: Position) -> Option<CellState> {
        if pos.row >= self.side || pos.col >= self.side {
            return None;
        }
        let i = pos.row as usize * self.side as usize + pos.col as usize;
        self.cells.get(i).copied().flatten()
    }

    /// Occupied cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Position, CellState)> + '_ {
        let side = self.side.max(1) as usize;
        self.cells.iter().enumerate().filter_map(move |(i, c)| {
            c.map(|c| (Position::new((i / side) as u32, (i % side) as u32), c))
        })
    }

    pub fn counts(&self) -> StateCounts {
        StateCounts::from_states(self.cells.iter().flatten().map(|c| c.state))
    }

    /// One line per row: `.` for an empty cell, otherwise the state glyph
    /// (`S`, `A`, `Y`, `R`).
    pub fn render(&self) -> String {
        let side = self.side as usize;
        let mut out = String::with_capacity(self.cells.len() + side);
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 && i % side == 0 {
                out.push('\n');
            }
            out.push(cell.map_or('.', |c| c.state.glyph()));
        }
        out
    }
}

//! Lattice representation.
//!
//! # Data layout
//!
//! Cells are stored row-major in one `Vec<Cell>`; `CellId(row * side + col)`
//! indexes it directly.  Adjacency is static for the lifetime of the lattice
//! and is built once in **Compressed Sparse Row (CSR)** form.  The neighbors
//! of cell `c` occupy the slice:
//!
//! ```text
//! adjacency[ adj_start[c] .. adj_start[c+1] ]
//! ```
//!
//! Each slice is ordered by the neighborhood's offset list (clockwise from
//! "up"), so every scan over neighbors is deterministic and allocation-free.
//! Only occupancy changes after construction.

use epi_core::{AgentId, Boundary, CellId, Neighborhood};

use crate::{Cell, LatticeError, LatticeResult, Position};

/// A fixed `side × side` grid of cells with nearest-neighbor adjacency.
pub struct LatticeGraph {
    side:         u32,
    boundary:     Boundary,
    neighborhood: Neighborhood,

    /// All cells, row-major.  Indexed by `CellId`.
    cells: Vec<Cell>,

    /// CSR row pointer.  Length = `cell_count + 1`.
    adj_start: Vec<usize>,

    /// Concatenated neighbor lists.
    adjacency: Vec<CellId>,
}

impl LatticeGraph {
    /// Largest side whose cell count still fits a `u32` `CellId`.
    pub const MAX_SIDE: u32 = epi_core::config::MAX_SIDE;

    /// Build an empty (unoccupied) lattice.
    ///
    /// Time complexity: O(side² · degree).
    pub fn new(side: u32, boundary: Boundary, neighborhood: Neighborhood) -> LatticeResult<Self> {
        if side == 0 {
            return Err(LatticeError::EmptyLattice);
        }
        if side > Self::MAX_SIDE {
            return Err(LatticeError::TooLarge { side, max: Self::MAX_SIDE });
        }
        let cell_count = side as usize * side as usize;

        let cells: Vec<Cell> = (0..side)
            .flat_map(|row| (0..side).map(move |col| Cell {
                position: Position::new(row, col),
                occupant: None,
            }))
            .collect();

        let mut adj_start = Vec::with_capacity(cell_count + 1);
        let mut adjacency = Vec::with_capacity(cell_count * neighborhood.degree());
        adj_start.push(0usize);

        for cell in &cells {
            let own = linear(side, cell.position);
            let first = adjacency.len();
            for &(d_row, d_col) in neighborhood.offsets() {
                let Some(pos) = offset(side, boundary, cell.position, d_row, d_col) else {
                    continue;
                };
                let id = linear(side, pos);
                // Tiny tori fold several offsets onto the same cell (or onto
                // the cell itself); keep each neighbor once.
                if id == own || adjacency[first..].contains(&id) {
                    continue;
                }
                adjacency.push(id);
            }
            adj_start.push(adjacency.len());
        }
        debug_assert_eq!(adj_start.len(), cell_count + 1);

        Ok(Self { side, boundary, neighborhood, cells, adj_start, adjacency })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn side(&self) -> u32 {
        self.side
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    pub fn neighborhood(&self) -> Neighborhood {
        self.neighborhood
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    // ── Addressing ────────────────────────────────────────────────────────

    /// `CellId` of `pos`, or `OutOfBounds`.
    #[inline]
    pub fn cell_id(&self, pos: Position) -> LatticeResult<CellId> {
        if pos.row >= self.side || pos.col >= self.side {
            return Err(LatticeError::OutOfBounds { pos, side: self.side });
        }
        Ok(linear(self.side, pos))
    }

    /// Position of `cell`.
    ///
    /// # Panics
    /// Panics if `cell` is not a cell of this lattice.
    #[inline]
    pub fn position(&self, cell: CellId) -> Position {
        self.cells[cell.index()].position
    }

    /// O(1) lookup by `CellId`.
    #[inline]
    pub fn cell(&self, cell: CellId) -> LatticeResult<&Cell> {
        self.cells.get(cell.index()).ok_or(LatticeError::UnknownCell(cell))
    }

    /// O(1) lookup by position.
    pub fn cell_at(&self, pos: Position) -> LatticeResult<&Cell> {
        let id = self.cell_id(pos)?;
        Ok(&self.cells[id.index()])
    }

    /// Every cell, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    // ── Adjacency ─────────────────────────────────────────────────────────

    /// Neighbors of `cell` in deterministic order.  Contiguous slice, no
    /// allocation.
    #[inline]
    pub fn neighbors(&self, cell: CellId) -> &[CellId] {
        let start = self.adj_start[cell.index()];
        let end   = self.adj_start[cell.index() + 1];
        &self.adjacency[start..end]
    }

    /// Neighbor positions of `pos` (up, right, down, left for von Neumann).
    pub fn neighbors_of(&self, pos: Position) -> LatticeResult<impl Iterator<Item = Position> + '_> {
        let id = self.cell_id(pos)?;
        Ok(self.neighbors(id).iter().map(|&n| self.cells[n.index()].position))
    }

    /// Number of neighbors of `cell`.
    #[inline]
    pub fn degree(&self, cell: CellId) -> usize {
        self.neighbors(cell).len()
    }

    // ── Occupancy ─────────────────────────────────────────────────────────

    #[inline]
    pub fn occupant(&self, cell: CellId) -> Option<AgentId> {
        self.cells.get(cell.index()).and_then(|c| c.occupant)
    }

    /// Put `agent` in `cell`.  Fails if the cell already has an occupant.
    pub fn place(&mut self, cell: CellId, agent: AgentId) -> LatticeResult<()> {
        let slot = self
            .cells
            .get_mut(cell.index())
            .ok_or(LatticeError::UnknownCell(cell))?;
        if let Some(occupant) = slot.occupant {
            return Err(LatticeError::CellOccupied { cell, occupant });
        }
        slot.occupant = Some(agent);
        Ok(())
    }

    /// All unoccupied cells in ascending `CellId` order.  Computed from the
    /// live occupancy on every call, so it is never stale.
    pub fn empty_cells(&self) -> Vec<CellId> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| CellId::from_index(i))
            .collect()
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }
}

// ── Coordinate helpers ────────────────────────────────────────────────────────

#[inline]
fn linear(side: u32, pos: Position) -> CellId {
    CellId(pos.row * side + pos.col)
}

/// Apply `(d_row, d_col)` to `pos`.  Returns `None` when an open boundary
/// cuts the neighbor off.
fn offset(side: u32, boundary: Boundary, pos: Position, d_row: i64, d_col: i64) -> Option<Position> {
    let side = side as i64;
    let row = pos.row as i64 + d_row;
    let col = pos.col as i64 + d_col;
    match boundary {
        Boundary::Open => {
            if (0..side).contains(&row) && (0..side).contains(&col) {
                Some(Position::new(row as u32, col as u32))
            } else {
                None
            }
        }
        Boundary::Toroidal => Some(Position::new(
            row.rem_euclid(side) as u32,
            col.rem_euclid(side) as u32,
        )),
    }
}

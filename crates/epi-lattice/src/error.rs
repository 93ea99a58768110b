//! Lattice error type.

use thiserror::Error;

use epi_core::{AgentId, CellId};

use crate::Position;

/// Errors produced by `epi-lattice`.
#[derive(Debug, Error)]
pub enum LatticeError {
    #[error("lattice side must be at least 1")]
    EmptyLattice,

    #[error("lattice side {side} exceeds the maximum of {max}")]
    TooLarge { side: u32, max: u32 },

    #[error("position {pos} is outside a {side}x{side} lattice")]
    OutOfBounds { pos: Position, side: u32 },

    #[error("{0} is not a cell of this lattice")]
    UnknownCell(CellId),

    #[error("{cell} is already occupied by {occupant}")]
    CellOccupied { cell: CellId, occupant: AgentId },
}

pub type LatticeResult<T> = Result<T, LatticeError>;

//! Lattice sites.

use std::fmt;

use epi_core::AgentId;

/// Integer coordinate of a lattice site, `0 <= row, col < side`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: u32,
    pub col: u32,
}

impl Position {
    #[inline]
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One lattice site.
///
/// `occupant` is a non-owning key into the network's agent registry; the
/// cell never owns the agent.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub position: Position,
    pub occupant: Option<AgentId>,
}

impl Cell {
    /// `true` if no agent lives here (eligible for influx placement).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }
}

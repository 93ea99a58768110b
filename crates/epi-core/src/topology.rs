//! Lattice topology options: boundary handling and neighborhood shape.

use std::str::FromStr;

use crate::EpiError;

/// How the lattice treats its edges.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Boundary {
    /// Edge cells have fewer neighbors; no wraparound.
    #[default]
    Open,
    /// Coordinates wrap modulo the side length (torus).
    Toroidal,
}

impl Boundary {
    pub fn as_str(self) -> &'static str {
        match self {
            Boundary::Open     => "open",
            Boundary::Toroidal => "toroidal",
        }
    }
}

impl std::fmt::Display for Boundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Boundary {
    type Err = EpiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "open"              => Ok(Boundary::Open),
            "toroidal" | "torus" => Ok(Boundary::Toroidal),
            other => Err(EpiError::Parse(format!("unknown boundary '{other}'"))),
        }
    }
}

/// Which surrounding cells count as neighbors.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Neighborhood {
    /// Four orthogonal neighbors.
    #[default]
    VonNeumann,
    /// Orthogonal plus diagonal neighbors (eight).
    Moore,
}

impl Neighborhood {
    /// `(d_row, d_col)` offsets in enumeration order, clockwise from "up".
    pub fn offsets(self) -> &'static [(i64, i64)] {
        match self {
            Neighborhood::VonNeumann => &[(-1, 0), (0, 1), (1, 0), (0, -1)],
            Neighborhood::Moore => &[
                (-1, 0), (-1, 1), (0, 1), (1, 1),
                (1, 0), (1, -1), (0, -1), (-1, -1),
            ],
        }
    }

    /// Maximum neighbor count for an interior cell.
    #[inline]
    pub fn degree(self) -> usize {
        self.offsets().len()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Neighborhood::VonNeumann => "von-neumann",
            Neighborhood::Moore      => "moore",
        }
    }
}

impl std::fmt::Display for Neighborhood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Neighborhood {
    type Err = EpiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "von-neumann" | "vonneumann" | "4" => Ok(Neighborhood::VonNeumann),
            "moore" | "8"                      => Ok(Neighborhood::Moore),
            other => Err(EpiError::Parse(format!("unknown neighborhood '{other}'"))),
        }
    }
}

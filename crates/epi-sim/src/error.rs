use epi_core::{AgentId, EpiError};
use epi_lattice::{LatticeError, Position};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] EpiError),

    #[error("lattice error: {0}")]
    Lattice(#[from] LatticeError),

    #[error("cannot seed {requested} infections: only {placed} agents were placed")]
    InsufficientPopulation {
        requested: usize,
        placed:    usize,
    },

    #[error("{got} seed positions supplied but n_0 is {expected}")]
    SeedCountMismatch {
        expected: usize,
        got:      usize,
    },

    #[error("seed position {0} has no occupant")]
    SeedCellEmpty(Position),

    #[error("seed position {0} listed more than once")]
    DuplicateSeed(Position),

    #[error("{0} is not a registered agent")]
    UnknownAgent(AgentId),

    #[error("invariant violated: {0}")]
    Invariant(String),
}

pub type SimResult<T> = Result<T, SimError>;

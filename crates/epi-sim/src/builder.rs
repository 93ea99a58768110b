//! Fluent builder for constructing a [`Sim`].

use epi_core::{AgentId, CellId, EpiConfig, RandomSource, SimRng};
use epi_lattice::{LatticeGraph, Position};
use log::info;

use crate::{DiseaseParams, Network, Sim, SimError, SimResult};

/// Fluent builder for [`Sim<R>`].
///
/// # Build sequence
///
/// 1. Validate the [`EpiConfig`].
/// 2. Build an `L×L` lattice with the configured boundary and neighborhood.
/// 3. Visit cells in row-major order; each receives a Susceptible agent with
///    probability `density`.
/// 4. Infect `n_0` distinct agents, either drawn uniformly at random or
///    taken from [`initial_infected`][Self::initial_infected].
///
/// All draws come from the same [`RandomSource`] the run then continues
/// with, so a seed fixes the whole trajectory.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::seeded(config)
///     .initial_infected(vec![Position::new(5, 5)])
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<R: RandomSource> {
    config: EpiConfig,
    rng:    R,
    seeds:  Option<Vec<Position>>,
}

impl SimBuilder<SimRng> {
    /// Builder whose RNG is seeded from `config.seed`.
    pub fn seeded(config: EpiConfig) -> Self {
        let rng = SimRng::new(config.seed);
        Self::new(config, rng)
    }
}

impl<R: RandomSource> SimBuilder<R> {
    pub fn new(config: EpiConfig, rng: R) -> Self {
        Self { config, rng, seeds: None }
    }

    /// Pin the initially infected agents to the occupants of `positions`.
    ///
    /// Must name exactly `config.initial_infected` distinct, occupied cells.
    pub fn initial_infected(mut self, positions: Vec<Position>) -> Self {
        self.seeds = Some(positions);
        self
    }

    /// Validate, populate, seed, and return a ready-to-run [`Sim`].
    pub fn build(mut self) -> SimResult<Sim<R>> {
        self.config.validate()?;

        let lattice = LatticeGraph::new(
            self.config.side,
            self.config.boundary,
            self.config.neighborhood,
        )?;
        let mut network = Network::new(lattice, DiseaseParams::from_config(&self.config));

        // ── Populate ──────────────────────────────────────────────────────
        for i in 0..network.lattice().cell_count() {
            if self.rng.gen_bool(self.config.density) {
                network.add_agent(CellId::from_index(i))?;
            }
        }
        let placed = network.population();

        // ── Seed ──────────────────────────────────────────────────────────
        let requested = self.config.initial_infected;
        match self.seeds.take() {
            Some(positions) => seed_pinned(&mut network, requested, &positions)?,
            None => {
                if requested > placed {
                    return Err(SimError::InsufficientPopulation { requested, placed });
                }
                for i in self.rng.sample_indices(placed, requested) {
                    network.seed_infection(AgentId::from_index(i))?;
                }
            }
        }
        network.verify()?;

        info!(
            "built {side}x{side} {} lattice ({} neighborhood): {placed} agents, {requested} infected",
            self.config.boundary,
            self.config.neighborhood,
            side = self.config.side,
        );

        Ok(Sim { config: self.config, network, rng: self.rng })
    }
}

fn seed_pinned(network: &mut Network, requested: usize, positions: &[Position]) -> SimResult<()> {
    if positions.len() != requested {
        return Err(SimError::SeedCountMismatch { expected: requested, got: positions.len() });
    }
    for &pos in positions {
        let cell = network.lattice().cell_id(pos)?;
        let agent = network
            .lattice()
            .occupant(cell)
            .ok_or(SimError::SeedCellEmpty(pos))?;
        if !network.seed_infection(agent)? {
            return Err(SimError::DuplicateSeed(pos));
        }
    }
    Ok(())
}

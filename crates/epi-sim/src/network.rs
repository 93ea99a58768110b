//! `Network`: the lattice plus its agents, and the synchronous step.
//!
//! The lattice says who sits where; the [`AgentStore`] owns every agent.
//! Cells hold an [`AgentId`] only, and each agent records its own
//! [`CellId`].  [`Network::verify`] checks that the two views agree.

use epi_agent::{AgentStore, PhaseDurations};
use epi_core::{AgentId, CellId, DiseaseState, EpiConfig, RandomSource, Tick};
use epi_lattice::{LatticeError, LatticeGraph};
use log::{debug, trace};

use crate::{LatticeSnapshot, SimError, SimResult, StateCounts};

// ── DiseaseParams ─────────────────────────────────────────────────────────────

/// Per-run disease and arrival parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DiseaseParams {
    /// Per-contact, per-step transmission probability (`lam`).
    pub infection_rate: f64,
    pub durations:      PhaseDurations,
    /// Expected number of new Susceptible arrivals per step.
    pub influx:         f64,
}

impl DiseaseParams {
    pub fn from_config(config: &EpiConfig) -> Self {
        Self {
            infection_rate: config.infection_rate,
            durations:      PhaseDurations::new(
                config.asymptomatic_ticks,
                config.symptomatic_ticks,
            ),
            influx:         config.influx,
        }
    }
}

// ── Network ───────────────────────────────────────────────────────────────────

pub struct Network {
    pub(crate) lattice: LatticeGraph,
    pub(crate) agents:  AgentStore,
    params:             DiseaseParams,
    time:               Tick,
    /// Agents added by influx since construction.
    influx_placed:      u64,
}

impl Network {
    /// An unpopulated network at tick 0.
    pub fn new(lattice: LatticeGraph, params: DiseaseParams) -> Self {
        let agents = AgentStore::with_capacity(lattice.cell_count());
        Self { lattice, agents, params, time: Tick::ZERO, influx_placed: 0 }
    }

    #[inline]
    pub fn lattice(&self) -> &LatticeGraph {
        &self.lattice
    }

    #[inline]
    pub fn agents(&self) -> &AgentStore {
        &self.agents
    }

    #[inline]
    pub fn params(&self) -> &DiseaseParams {
        &self.params
    }

    /// Number of completed steps.
    #[inline]
    pub fn time(&self) -> Tick {
        self.time
    }

    #[inline]
    pub fn population(&self) -> usize {
        self.agents.len()
    }

    /// Total arrivals placed by influx so far.
    #[inline]
    pub fn influx_placed(&self) -> u64 {
        self.influx_placed
    }

    /// State of the agent occupying `cell`, if any.
    pub fn state_at(&self, cell: CellId) -> Option<DiseaseState> {
        self.lattice
            .occupant(cell)
            .and_then(|id| self.agents.get(id))
            .map(|a| a.state())
    }

    /// Create a Susceptible agent in the empty cell `cell`.
    pub fn add_agent(&mut self, cell: CellId) -> SimResult<AgentId> {
        if let Some(occupant) = self.lattice.cell(cell)?.occupant {
            return Err(LatticeError::CellOccupied { cell, occupant }.into());
        }
        let id = self.agents.push_agent(cell);
        self.lattice.place(cell, id)?;
        Ok(id)
    }

    /// Move a Susceptible agent into the first infectious phase.
    ///
    /// Returns `false` if the agent was not Susceptible.
    pub fn seed_infection(&mut self, agent: AgentId) -> SimResult<bool> {
        let durations = self.params.durations;
        let target = self
            .agents
            .get_mut(agent)
            .ok_or(SimError::UnknownAgent(agent))?;
        Ok(target.infect(&durations))
    }

    pub fn counts(&self) -> StateCounts {
        StateCounts::from_states(self.agents.states())
    }

    pub fn snapshot(&self) -> LatticeSnapshot {
        LatticeSnapshot::capture(self)
    }

    // ── Step ──────────────────────────────────────────────────────────────

    /// Run one synchronous step and return the counts after it.
    pub fn step<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> SimResult<StateCounts> {
        let exposed = self.transmission_phase(rng);
        trace!("{}: {} conversions queued", self.time.next(), exposed.len());
        let fresh = self.apply_infections(&exposed);
        let fired = self.agents.advance_all(&self.params.durations, &fresh);
        let arrivals = self.influx_phase(rng)?;

        self.time = self.time.next();
        self.verify()?;

        let counts = self.counts();
        debug!(
            "{}: {} infected, {} progressed, {} arrived; {counts}",
            self.time,
            exposed.len(),
            fired,
            arrivals
        );
        Ok(counts)
    }

    /// Read-only: decide which Susceptible agents catch the disease.
    ///
    /// One Bernoulli(lam) trial per infectious neighbor, stopping at the
    /// first success.  Agents are visited in ascending id order and their
    /// neighbors in lattice order, so the RNG stream is reproducible.
    fn transmission_phase<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Vec<AgentId> {
        let lam = self.params.infection_rate;
        if lam <= 0.0 {
            return Vec::new();
        }

        let infectious = self.agents.infectious_snapshot();
        let mut exposed = Vec::new();
        for agent in self.agents.iter() {
            if agent.state() != DiseaseState::Susceptible {
                continue;
            }
            let caught = self
                .lattice
                .neighbors(agent.cell)
                .iter()
                .filter_map(|&n| self.lattice.occupant(n))
                .filter(|other| infectious.get(other.index()).copied().unwrap_or(false))
                .any(|_| rng.gen_bool(lam));
            if caught {
                exposed.push(agent.id);
            }
        }
        exposed
    }

    /// Apply queued S→A conversions.  Returns a per-agent mask of the agents
    /// converted this step so their clocks do not also run this step.
    fn apply_infections(&mut self, exposed: &[AgentId]) -> Vec<bool> {
        let durations = self.params.durations;
        let mut fresh = vec![false; self.agents.len()];
        for &id in exposed {
            if let Some(agent) = self.agents.get_mut(id) {
                if agent.infect(&durations) {
                    fresh[id.index()] = true;
                }
            }
        }
        fresh
    }

    /// Place new Susceptible agents in distinct empty cells.
    ///
    /// `influx` is an expected count: `floor(influx)` arrivals plus one more
    /// with probability `fract(influx)`, clamped to the number of empty cells.
    fn influx_phase<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> SimResult<usize> {
        let rate = self.params.influx;
        if rate <= 0.0 {
            return Ok(0);
        }

        let whole = rate.trunc();
        let fract = rate - whole;
        let mut requested = whole as usize;
        if fract > 0.0 && rng.gen_bool(fract) {
            requested += 1;
        }
        if requested == 0 {
            return Ok(0);
        }

        let empty = self.lattice.empty_cells();
        if empty.is_empty() {
            trace!("{}: influx of {requested} dropped, lattice is full", self.time.next());
            return Ok(0);
        }

        let picks = rng.sample_indices(empty.len(), requested);
        for &i in &picks {
            self.add_agent(empty[i])?;
        }
        self.influx_placed += picks.len() as u64;
        trace!(
            "{}: placed {} of {requested} arrivals ({} cells were empty)",
            self.time.next(),
            picks.len(),
            empty.len()
        );
        Ok(picks.len())
    }

    // ── Invariants ────────────────────────────────────────────────────────

    /// Check that cells and agents agree and that every clock is in range.
    pub fn verify(&self) -> SimResult<()> {
        for (i, cell) in self.lattice.cells().iter().enumerate() {
            let Some(occupant) = cell.occupant else { continue };
            match self.agents.get(occupant) {
                None => {
                    return Err(SimError::Invariant(format!(
                        "cell {} holds {occupant}, which is not registered",
                        cell.position
                    )));
                }
                Some(agent) if agent.cell.index() != i => {
                    return Err(SimError::Invariant(format!(
                        "cell {} holds {occupant}, which is registered at {}",
                        cell.position, agent.cell
                    )));
                }
                Some(_) => {}
            }
        }

        let durations = &self.params.durations;
        for agent in self.agents.iter() {
            if self.lattice.occupant(agent.cell) != Some(agent.id) {
                return Err(SimError::Invariant(format!(
                    "{} is registered at {} but that cell holds {:?}",
                    agent.id,
                    agent.cell,
                    self.lattice.occupant(agent.cell)
                )));
            }
            if !agent.clock_is_consistent(durations) {
                return Err(SimError::Invariant(format!(
                    "{} has spent {} ticks {} (limit {:?})",
                    agent.id,
                    agent.ticks_in_state(),
                    agent.state(),
                    durations.threshold(agent.state())
                )));
            }
        }
        Ok(())
    }
}

//! `AgentStore`: the authoritative agent registry.
//!
//! Agents are never removed, so ids are dense: `AgentId(i)` lives at index
//! `i` of the backing `Vec`, and lookup is a bounds-checked index.  Lattice
//! cells refer to agents by id only; this store owns them.

use epi_core::{AgentId, CellId, DiseaseState};

use crate::{Agent, PhaseDurations};

/// Append-only registry of every agent created during a run.
#[derive(Default)]
pub struct AgentStore {
    agents: Vec<Agent>,
}

impl AgentStore {
    pub fn new() -> Self {
        Self { agents: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { agents: Vec::with_capacity(capacity) }
    }

    /// Number of agents.
    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Create a Susceptible agent at `cell` and return its id.
    ///
    /// The caller is responsible for recording the id in the lattice cell.
    pub fn push_agent(&mut self, cell: CellId) -> AgentId {
        let id = AgentId::from_index(self.agents.len());
        self.agents.push(Agent::new(id, cell));
        id
    }

    #[inline]
    pub fn get(&self, agent: AgentId) -> Option<&Agent> {
        self.agents.get(agent.index())
    }

    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(agent.index())
    }

    /// `true` if `agent` is registered.
    #[inline]
    pub fn contains(&self, agent: AgentId) -> bool {
        agent.index() < self.agents.len()
    }

    /// All agents in ascending id order.
    pub fn iter(&self) -> std::slice::Iter<'_, Agent> {
        self.agents.iter()
    }

    /// State of every agent, indexed by `AgentId`.
    pub fn states(&self) -> impl Iterator<Item = DiseaseState> + '_ {
        self.agents.iter().map(Agent::state)
    }

    /// Per-agent infectious flag, indexed by `AgentId`.  Taken once at the
    /// start of a step so every transmission trial sees the same picture.
    pub fn infectious_snapshot(&self) -> Vec<bool> {
        self.agents.iter().map(Agent::is_infectious).collect()
    }

    /// Advance every agent's clock except those flagged in `skip`.
    ///
    /// Returns the number of transitions that fired.
    pub fn advance_all(&mut self, durations: &PhaseDurations, skip: &[bool]) -> usize {
        let mut fired = 0;
        for agent in &mut self.agents {
            if skip.get(agent.id.index()).copied().unwrap_or(false) {
                continue;
            }
            if agent.advance(durations).is_some() {
                fired += 1;
            }
        }
        fired
    }
}

//! The per-agent disease state machine.
//!
//! ```text
//!   Susceptible ──(transmission)──▶ Asymptomatic ──(asym_l ticks)──▶
//!   Symptomatic ──(symp_l ticks)──▶ Recovered (terminal)
//! ```
//!
//! `ticks_in_state` resets to 0 on every transition and only runs while the
//! agent is Asymptomatic or Symptomatic.  The transition fires on the tick the
//! counter reaches the phase length, so `ticks_in_state < threshold` holds
//! between steps.  A phase of length 0 is skipped on entry.

use epi_core::{AgentId, CellId, DiseaseState};

/// Length of each timed phase, in ticks.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhaseDurations {
    pub asymptomatic: u32,
    pub symptomatic:  u32,
}

impl PhaseDurations {
    pub fn new(asymptomatic: u32, symptomatic: u32) -> Self {
        Self { asymptomatic, symptomatic }
    }

    /// Ticks an agent stays in `state`, or `None` if the state is not timed.
    #[inline]
    pub fn threshold(&self, state: DiseaseState) -> Option<u32> {
        match state {
            DiseaseState::Asymptomatic => Some(self.asymptomatic),
            DiseaseState::Symptomatic  => Some(self.symptomatic),
            DiseaseState::Susceptible | DiseaseState::Recovered => None,
        }
    }
}

/// A single simulated individual.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    /// Registry key; stable for the agent's lifetime.
    pub id: AgentId,
    /// Cell the agent occupies.
    pub cell: CellId,
    state: DiseaseState,
    ticks_in_state: u32,
}

impl Agent {
    /// A new Susceptible agent.
    pub fn new(id: AgentId, cell: CellId) -> Self {
        Self { id, cell, state: DiseaseState::Susceptible, ticks_in_state: 0 }
    }

    #[inline]
    pub fn state(&self) -> DiseaseState {
        self.state
    }

    #[inline]
    pub fn ticks_in_state(&self) -> u32 {
        self.ticks_in_state
    }

    #[inline]
    pub fn is_infectious(&self) -> bool {
        self.state.is_infectious()
    }

    /// Convert a Susceptible agent to Asymptomatic with a fresh clock.
    ///
    /// Returns `false` (and changes nothing) for any other state.  The clock
    /// first advances on the *next* call to [`advance`](Self::advance).
    pub fn infect(&mut self, durations: &PhaseDurations) -> bool {
        if self.state != DiseaseState::Susceptible {
            return false;
        }
        self.enter(DiseaseState::Asymptomatic, durations);
        true
    }

    /// Run the per-step clock.  Returns the new state if a transition fired.
    ///
    /// Susceptible and Recovered agents are untouched.
    pub fn advance(&mut self, durations: &PhaseDurations) -> Option<DiseaseState> {
        let threshold = durations.threshold(self.state)?;
        self.ticks_in_state += 1;
        if self.ticks_in_state < threshold {
            return None;
        }
        let next = self.state.successor()?;
        self.enter(next, durations);
        Some(self.state)
    }

    /// `true` if the clock invariant holds for the current state.
    pub fn clock_is_consistent(&self, durations: &PhaseDurations) -> bool {
        match durations.threshold(self.state) {
            Some(threshold) => self.ticks_in_state < threshold,
            None            => self.ticks_in_state == 0,
        }
    }

    /// Switch to `state`, reset the clock, and fall through zero-length phases.
    fn enter(&mut self, mut state: DiseaseState, durations: &PhaseDurations) {
        while durations.threshold(state) == Some(0) {
            match state.successor() {
                Some(next) => state = next,
                None       => break,
            }
        }
        self.state = state;
        self.ticks_in_state = 0;
    }
}

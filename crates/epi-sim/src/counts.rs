//! Aggregate counts per disease state and the time series built from them.

use std::fmt;

use epi_core::{DiseaseState, Tick};

/// Number of agents in each disease state at one tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateCounts {
    pub susceptible:  u64,
    pub asymptomatic: u64,
    pub symptomatic:  u64,
    pub recovered:    u64,
}

impl StateCounts {
    pub fn new(susceptible: u64, asymptomatic: u64, symptomatic: u64, recovered: u64) -> Self {
        Self { susceptible, asymptomatic, symptomatic, recovered }
    }

    /// Tally an iterator of states.
    pub fn from_states<I: IntoIterator<Item = DiseaseState>>(states: I) -> Self {
        let mut counts = Self::default();
        for state in states {
            counts.record(state);
        }
        counts
    }

    #[inline]
    pub fn record(&mut self, state: DiseaseState) {
        *self.slot(state) += 1;
    }

    /// Total population.
    #[inline]
    pub fn total(&self) -> u64 {
        self.susceptible + self.asymptomatic + self.symptomatic + self.recovered
    }

    /// Agents able to transmit (A + Sy).
    #[inline]
    pub fn infectious(&self) -> u64 {
        self.asymptomatic + self.symptomatic
    }

    fn slot(&mut self, state: DiseaseState) -> &mut u64 {
        match state {
            DiseaseState::Susceptible  => &mut self.susceptible,
            DiseaseState::Asymptomatic => &mut self.asymptomatic,
            DiseaseState::Symptomatic  => &mut self.symptomatic,
            DiseaseState::Recovered    => &mut self.recovered,
        }
    }
}

impl fmt::Display for StateCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "S={} A={} Y={} R={} (N={})",
            self.susceptible,
            self.asymptomatic,
            self.symptomatic,
            self.recovered,
            self.total()
        )
    }
}

// ── TimeSeries ────────────────────────────────────────────────────────────────

/// Ordered aggregate counts, one record per tick starting at `start`.
///
/// A full run from tick 0 holds `steps + 1` records.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeSeries {
    start:   Tick,
    records: Vec<StateCounts>,
}

impl TimeSeries {
    pub fn new(start: Tick) -> Self {
        Self { start, records: Vec::new() }
    }

    pub(crate) fn push(&mut self, counts: StateCounts) {
        self.records.push(counts);
    }

    pub fn start(&self) -> Tick {
        self.start
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Counts at `tick`, if it falls inside the series.
    pub fn get(&self, tick: Tick) -> Option<&StateCounts> {
        if tick < self.start {
            return None;
        }
        self.records.get(tick.since(self.start) as usize)
    }

    pub fn records(&self) -> &[StateCounts] {
        &self.records
    }

    pub fn last(&self) -> Option<&StateCounts> {
        self.records.last()
    }

    /// `(tick, counts)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (Tick, &StateCounts)> + '_ {
        self.records
            .iter()
            .enumerate()
            .map(|(i, c)| (self.start.offset(i as u64), c))
    }

    /// Tick and size of the largest infectious (A + Sy) population.
    /// Earliest tick wins ties.
    pub fn peak_infectious(&self) -> Option<(Tick, u64)> {
        self.iter()
            .map(|(t, c)| (t, c.infectious()))
            .fold(None, |best, (t, n)| match best {
                Some((_, m)) if m >= n => best,
                _ => Some((t, n)),
            })
    }
}

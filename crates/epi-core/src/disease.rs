//! Disease state enum shared across the agent, simulation, and output crates.

/// The four mutually exclusive disease states.
///
/// `Asymptomatic` and `Symptomatic` are infectious; `Recovered` is terminal.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiseaseState {
    /// Not yet infected (default state for every new agent).
    #[default]
    Susceptible,
    /// Infected and infectious, no symptoms yet.
    Asymptomatic,
    /// Infected, infectious, and showing symptoms.
    Symptomatic,
    /// Permanently immune.
    Recovered,
}

impl DiseaseState {
    /// All states in canonical order (S, A, Sy, R).
    pub const ALL: [DiseaseState; 4] = [
        DiseaseState::Susceptible,
        DiseaseState::Asymptomatic,
        DiseaseState::Symptomatic,
        DiseaseState::Recovered,
    ];

    /// `true` for states able to transmit to a susceptible neighbor.
    #[inline]
    pub fn is_infectious(self) -> bool {
        matches!(self, DiseaseState::Asymptomatic | DiseaseState::Symptomatic)
    }

    /// The state reached when the current phase's clock runs out.
    ///
    /// `None` for `Susceptible` (left only through transmission) and
    /// `Recovered` (terminal).
    #[inline]
    pub fn successor(self) -> Option<DiseaseState> {
        match self {
            DiseaseState::Asymptomatic => Some(DiseaseState::Symptomatic),
            DiseaseState::Symptomatic  => Some(DiseaseState::Recovered),
            DiseaseState::Susceptible | DiseaseState::Recovered => None,
        }
    }

    /// Position in [`DiseaseState::ALL`].  Never decreases over an agent's life.
    #[inline]
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Human-readable label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            DiseaseState::Susceptible  => "susceptible",
            DiseaseState::Asymptomatic => "asymptomatic",
            DiseaseState::Symptomatic  => "symptomatic",
            DiseaseState::Recovered    => "recovered",
        }
    }

    /// Single-character glyph for ASCII lattice renders.
    pub fn glyph(self) -> char {
        match self {
            DiseaseState::Susceptible  => 'S',
            DiseaseState::Asymptomatic => 'A',
            DiseaseState::Symptomatic  => 'Y',
            DiseaseState::Recovered    => 'R',
        }
    }
}

impl std::fmt::Display for DiseaseState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

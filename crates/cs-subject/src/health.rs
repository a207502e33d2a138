//! Health state and countdown transitions.

/// Ticks an infected subject stays infected.
pub const INFECTED_DURATION: u32 = 200;

/// Ticks an immune subject stays immune.
pub const IMMUNE_DURATION: u32 = 400;

/// Epidemiological state of one subject.
///
/// Each countdown lives inside the variant it belongs to, so a subject can
/// never be infected and immune at once, and a stale countdown from a
/// previous state cannot leak into the next one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HealthState {
    #[default]
    Susceptible,
    /// `remaining` ticks until the subject becomes immune.
    Infected { remaining: u32 },
    /// `remaining` ticks until the subject becomes susceptible again.
    Immune { remaining: u32 },
}

impl HealthState {
    /// A freshly infected state with the full countdown.
    #[inline]
    pub fn infected() -> Self {
        HealthState::Infected { remaining: INFECTED_DURATION }
    }

    /// A freshly immune state with the full countdown.
    #[inline]
    pub fn immune() -> Self {
        HealthState::Immune { remaining: IMMUNE_DURATION }
    }

    /// State after one tick of the infected countdown.  Non-infected states
    /// are returned unchanged.
    pub fn after_infection_tick(self) -> Self {
        match self {
            HealthState::Infected { remaining } => match remaining.saturating_sub(1) {
                0 => HealthState::immune(),
                remaining => HealthState::Infected { remaining },
            },
            other => other,
        }
    }

    /// State after one tick of the immune countdown.  Non-immune states are
    /// returned unchanged.
    pub fn after_immunity_tick(self) -> Self {
        match self {
            HealthState::Immune { remaining } => match remaining.saturating_sub(1) {
                0 => HealthState::Susceptible,
                remaining => HealthState::Immune { remaining },
            },
            other => other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HealthState::Susceptible     => "susceptible",
            HealthState::Infected { .. } => "infected",
            HealthState::Immune { .. }   => "immune",
        }
    }
}

impl std::fmt::Display for HealthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

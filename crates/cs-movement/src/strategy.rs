//! Movement policies.

/// A pure `(point, speed, dt) → point` policy applied per axis.
///
/// The set is closed: the engine never registers strategies at runtime, so an
/// enum dispatch is all that is needed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MovementStrategy {
    /// Unrestricted movement: `point + speed * dt`.
    #[default]
    Regular,
    /// Mobility restricted to zero: the subject stays where it is.  It still
    /// has a velocity, which matters when something collides with it.
    Lockdown,
}

impl MovementStrategy {
    /// Next coordinate along one axis.
    #[inline]
    pub fn movement(self, point: f64, speed: f64, dt: f64) -> f64 {
        match self {
            MovementStrategy::Regular  => point + speed * dt,
            MovementStrategy::Lockdown => point,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MovementStrategy::Regular  => "regular",
            MovementStrategy::Lockdown => "lockdown",
        }
    }
}

impl std::fmt::Display for MovementStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

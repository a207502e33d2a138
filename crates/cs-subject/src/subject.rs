//! The `Subject` entity.

use cs_core::{StrategyId, Vec2};
use cs_movement::{MovementResult, StrategyTable};

use crate::HealthState;

/// One simulated person: a moving disk with a health state.
///
/// Radius is fixed at construction.  Position and velocity are mutated by the
/// simulation every tick; the subject only moves itself through the
/// strategy its [`StrategyId`] points at.
///
/// # Preconditions
///
/// `radius > 0`.  The simulation rejects zero-radius subjects when they are
/// added; a `Subject` on its own does not check.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Subject {
    position: Vec2,
    velocity: Vec2,
    radius:   u32,
    state:    HealthState,
    strategy: StrategyId,
}

impl Subject {
    /// A stationary, susceptible subject at `(x, y)`.
    pub fn new(x: f64, y: f64, radius: u32, strategy: StrategyId) -> Self {
        Self {
            position: Vec2::new(x, y),
            velocity: Vec2::ZERO,
            radius,
            state: HealthState::Susceptible,
            strategy,
        }
    }

    /// Set the initial velocity.
    pub fn with_velocity(mut self, dx: f64, dy: f64) -> Self {
        self.velocity = Vec2::new(dx, dy);
        self
    }

    /// Start the subject out infected (patient zero).
    pub fn infected(mut self) -> Self {
        self.infect();
        self
    }

    // ── Kinematics ────────────────────────────────────────────────────────

    #[inline] pub fn x(&self) -> f64 { self.position.x }
    #[inline] pub fn y(&self) -> f64 { self.position.y }
    #[inline] pub fn dx(&self) -> f64 { self.velocity.x }
    #[inline] pub fn dy(&self) -> f64 { self.velocity.y }

    #[inline] pub fn set_x(&mut self, x: f64) { self.position.x = x; }
    #[inline] pub fn set_y(&mut self, y: f64) { self.position.y = y; }
    #[inline] pub fn set_dx(&mut self, dx: f64) { self.velocity.x = dx; }
    #[inline] pub fn set_dy(&mut self, dy: f64) { self.velocity.y = dy; }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[inline]
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Heading of the velocity vector, `atan2(dy, dx)`.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.velocity.angle()
    }

    /// Magnitude of the velocity vector.
    #[inline]
    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }

    #[inline]
    pub fn strategy(&self) -> StrategyId {
        self.strategy
    }

    pub fn set_strategy(&mut self, strategy: StrategyId) {
        self.strategy = strategy;
    }

    /// Advance the position by one step of `dt` using the subject's strategy.
    /// Velocity is left untouched.
    ///
    /// # Errors
    ///
    /// Fails if the subject's strategy handle is not in `strategies`; the
    /// position is unchanged in that case.
    pub fn move_by(&mut self, dt: f64, strategies: &StrategyTable) -> MovementResult<()> {
        let x = strategies.movement(self.strategy, self.position.x, self.velocity.x, dt)?;
        let y = strategies.movement(self.strategy, self.position.y, self.velocity.y, dt)?;
        self.position = Vec2::new(x, y);
        Ok(())
    }

    // ── Health ────────────────────────────────────────────────────────────

    #[inline]
    pub fn state(&self) -> HealthState {
        self.state
    }

    #[inline]
    pub fn is_infected(&self) -> bool {
        matches!(self.state, HealthState::Infected { .. })
    }

    #[inline]
    pub fn is_immune(&self) -> bool {
        matches!(self.state, HealthState::Immune { .. })
    }

    #[inline]
    pub fn is_susceptible(&self) -> bool {
        self.state == HealthState::Susceptible
    }

    /// Infect the subject unless it is immune.  An already infected subject
    /// has its countdown restarted.
    ///
    /// Returns `true` if the subject was susceptible before the call.
    pub fn infect(&mut self) -> bool {
        match self.state {
            HealthState::Immune { .. } => false,
            previous => {
                self.state = HealthState::infected();
                previous == HealthState::Susceptible
            }
        }
    }

    /// One tick of the infected countdown.  The tick that reaches zero makes
    /// the subject immune.  No-op unless infected.
    pub fn advance_infection(&mut self) {
        self.state = self.state.after_infection_tick();
    }

    /// One tick of the immune countdown.  The tick that reaches zero makes
    /// the subject susceptible.  No-op unless immune.
    pub fn advance_immunity(&mut self) {
        self.state = self.state.after_immunity_tick();
    }
}

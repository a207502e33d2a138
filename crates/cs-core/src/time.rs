//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  Each tick corresponds
//! to one host scheduling cycle of `tick_interval_ms` real milliseconds, and
//! advances kinematics by a *simulated* step of
//!
//!   dt = tick_interval_ms / 10.0
//!
//! The fixed scale factor decouples the host's real-time cadence from how
//! far subjects travel per tick.

use std::fmt;
use std::time::Duration;

use crate::{CsError, CsResult};

/// Divisor mapping the real tick interval (ms) to the simulated step.
pub const DT_SCALE: f64 = 10.0;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.  Tick 0 means "nothing has run yet";
/// the first call to `Sim::tick` produces tick 1.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// `true` when this tick falls on an `interval` boundary.
    ///
    /// An interval of 0 never matches (used to disable periodic hooks).
    #[inline]
    pub fn is_multiple_of(self, interval: u64) -> bool {
        interval > 0 && self.0 % interval == 0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current tick and the fixed real-time cadence of the run.
#[derive(Clone, Debug)]
pub struct SimClock {
    /// Real milliseconds between two ticks of the run loop.
    pub tick_interval_ms: u64,
    /// The most recently completed tick.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(tick_interval_ms: u64) -> Self {
        Self {
            tick_interval_ms,
            current_tick: Tick::ZERO,
        }
    }

    /// Advance the clock by one tick and return the new tick.
    #[inline]
    pub fn advance(&mut self) -> Tick {
        self.current_tick = Tick(self.current_tick.0 + 1);
        self.current_tick
    }

    /// Simulated time step applied to every subject's movement.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.tick_interval_ms as f64 / DT_SCALE
    }

    /// How long the run loop suspends between ticks.
    #[inline]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (every {} ms, dt {:.2})", self.current_tick, self.tick_interval_ms, self.dt())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Built by the application (CLI flags, constants, or a config file) and
/// handed to `SimBuilder`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Arena width in canvas units.  Fixed for the run.
    pub arena_width: u32,

    /// Arena height in canvas units.  Fixed for the run.
    pub arena_height: u32,

    /// Real milliseconds between ticks; also determines `dt`.
    pub tick_interval_ms: u64,

    /// Report the infected count every N ticks.  Default: 30.
    pub report_interval_ticks: u64,

    /// Hand a population snapshot to the observer every N ticks.
    /// 0 disables snapshots.
    pub snapshot_interval_ticks: u64,

    /// Stop `Sim::run` after this many ticks.  `None` runs until stopped.
    pub max_ticks: Option<u64>,

    /// Master seed for population bootstrap.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            arena_width:             800,
            arena_height:            500,
            tick_interval_ms:        15,
            report_interval_ticks:   30,
            snapshot_interval_ticks: 0,
            max_ticks:               None,
            seed:                    42,
        }
    }
}

impl SimConfig {
    /// Reject configurations the tick loop cannot run with.
    pub fn validate(&self) -> CsResult<()> {
        if self.arena_width == 0 || self.arena_height == 0 {
            return Err(CsError::Config(format!(
                "arena must be non-empty, got {}x{}",
                self.arena_width, self.arena_height
            )));
        }
        if self.report_interval_ticks == 0 {
            return Err(CsError::Config("report_interval_ticks must be at least 1".into()));
        }
        Ok(())
    }

    /// Simulated time step for this configuration.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.tick_interval_ms as f64 / DT_SCALE
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_interval_ms)
    }
}

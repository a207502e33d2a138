//! Fluent builder for a random starting population.
//!
//! # Usage
//!
//! ```rust
//! use cs_subject::PopulationBuilder;
//!
//! let subjects = PopulationBuilder::new(100, /*seed=*/ 42)
//!     .arena(800, 500)
//!     .radius(5)
//!     .lockdown_fraction(0.75)
//!     .initially_infected(1)
//!     .build();
//!
//! assert_eq!(subjects.len(), 100);
//! assert_eq!(subjects.iter().filter(|s| s.is_infected()).count(), 1);
//! ```

use cs_core::{SimRng, StrategyId};

use crate::Subject;

/// Seeded bootstrap for a population of subjects.
///
/// - Positions are uniform in `[1, width) × [1, height)`.  Subjects near an
///   edge may start partly outside the arena; the first wall pass clamps them.
/// - Velocities are uniform in `[-1, 1)` on each axis.
/// - The first `count × lockdown_fraction` subjects (rounded up) use
///   [`StrategyId::LOCKDOWN`], the rest [`StrategyId::REGULAR`].
/// - The last `initially_infected` subjects start infected.
///
/// The same seed always yields the same population.
#[derive(Clone, Debug)]
pub struct PopulationBuilder {
    count:              usize,
    seed:               u64,
    width:              u32,
    height:             u32,
    radius:             u32,
    lockdown_fraction:  f64,
    initially_infected: usize,
}

impl PopulationBuilder {
    /// Builder for `count` subjects with the reference defaults: 800×500
    /// arena, radius 5, 75 % under lockdown, one infected.
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            count,
            seed,
            width:              800,
            height:             500,
            radius:             5,
            lockdown_fraction:  0.75,
            initially_infected: 1,
        }
    }

    pub fn arena(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    /// Share of the population using the lockdown strategy, clamped to [0, 1].
    pub fn lockdown_fraction(mut self, fraction: f64) -> Self {
        self.lockdown_fraction = fraction.clamp(0.0, 1.0);
        self
    }

    /// How many subjects start infected.  Capped at the population size.
    pub fn initially_infected(mut self, n: usize) -> Self {
        self.initially_infected = n;
        self
    }

    /// Number of subjects that will receive the lockdown strategy.
    pub fn lockdown_count(&self) -> usize {
        ((self.count as f64 * self.lockdown_fraction).ceil() as usize).min(self.count)
    }

    pub fn build(self) -> Vec<Subject> {
        let mut root = SimRng::new(self.seed);
        let mut positions = root.child(0);
        let mut velocities = root.child(1);

        let lockdown = self.lockdown_count();
        let first_infected = self.count.saturating_sub(self.initially_infected);
        // Upper bounds must exceed the lower bound of 1.0 for gen_range.
        let max_x = f64::from(self.width).max(1.0 + f64::EPSILON);
        let max_y = f64::from(self.height).max(1.0 + f64::EPSILON);

        (0..self.count)
            .map(|i| {
                let x = positions.gen_range(1.0..max_x);
                let y = positions.gen_range(1.0..max_y);
                let dx = velocities.gen_range(-1.0..1.0);
                let dy = velocities.gen_range(-1.0..1.0);

                let strategy = if i < lockdown {
                    StrategyId::LOCKDOWN
                } else {
                    StrategyId::REGULAR
                };

                let subject = Subject::new(x, y, self.radius, strategy).with_velocity(dx, dy);
                if i >= first_infected { subject.infected() } else { subject }
            })
            .collect()
    }
}

//! `cs-subject` — the simulated individuals.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                |
//! |----------------|---------------------------------------------------------|
//! | [`health`]     | `HealthState` and the infection/immunity durations      |
//! | [`subject`]    | `Subject` — position, velocity, radius, health, policy  |
//! | [`population`] | `PopulationBuilder` — seeded random starting population |
//!
//! # State machine
//!
//! ```text
//! Susceptible ──infect()──▶ Infected ──200 advances──▶ Immune ──400 advances──▶ Susceptible
//! ```
//!
//! Immune subjects ignore `infect()`.  Re-infecting an infected subject
//! restarts its countdown.

pub mod health;
pub mod population;
pub mod subject;

#[cfg(test)]
mod tests;

pub use health::{HealthState, IMMUNE_DURATION, INFECTED_DURATION};
pub use population::PopulationBuilder;
pub use subject::Subject;

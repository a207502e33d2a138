//! `cs-core` — foundational types for the `rust_corsim` contagion simulator.
//!
//! This crate is a dependency of every other `cs-*` crate.  It has no `cs-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                       |
//! |-----------|------------------------------------------------|
//! | [`ids`]   | `SubjectId`, `StrategyId`                      |
//! | [`geo`]   | `Vec2`, centre distance, heading angles        |
//! | [`time`]  | `Tick`, `SimClock`, `SimConfig`                |
//! | [`rng`]   | `SimRng` (seeded bootstrap randomness)         |
//! | [`error`] | `CsError`, `CsResult`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CsError, CsResult};
pub use geo::Vec2;
pub use ids::{StrategyId, SubjectId};
pub use rng::SimRng;
pub use time::{SimClock, SimConfig, Tick};

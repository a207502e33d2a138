//! `cs-movement` — how subjects turn velocity into displacement.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`strategy`] | `MovementStrategy` — `Regular` / `Lockdown` policies       |
//! | [`table`]    | `StrategyTable` — shared policies addressed by `StrategyId` |
//! | [`error`]    | `MovementError`, `MovementResult<T>`                       |
//!
//! # Ownership model
//!
//! Strategies are stateless and shared by many subjects.  A subject never owns
//! its strategy; it stores a [`StrategyId`][cs_core::StrategyId] handle into a
//! `StrategyTable` owned by the simulation.  Mixing mobile and restricted
//! subjects is then a matter of which handle each subject carries.

pub mod error;
pub mod strategy;
pub mod table;


pub use error::{MovementError, MovementResult};
pub use strategy::MovementStrategy;
pub use table::StrategyTable;

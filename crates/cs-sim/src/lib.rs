//! `cs-sim` — tick loop orchestrator for the rust_corsim contagion simulator.
//!
//! # Tick loop
//!
//! ```text
//! every tick_interval_ms:
//!   ① Clock     — tick += 1; dt = tick_interval_ms / 10
//!   ② Walls     — reflect velocity / clamp position at the arena edges
//!   ③ Contacts  — all pairs: overlap → infect, elastic exchange, push apart
//!   ④ Move/age  — move by dt; advance infected / immune countdowns
//!   ⑤ Report    — every 30 ticks: on_infected_sample(tick / 30, count)
//!   ⑥ Draw      — clear, four walls, one ellipse per subject
//! ```
//!
//! The loop is single-threaded.  `Sim::run` sleeps between ticks so a host
//! thread can render or handle input; `Sim::stop` (or a [`StopHandle`]) ends
//! it between two ticks.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use cs_core::SimConfig;
//! use cs_sim::{NoopCanvas, NoopObserver, SimBuilder};
//! use cs_subject::PopulationBuilder;
//!
//! let config = SimConfig { max_ticks: Some(1_000), ..SimConfig::default() };
//! let subjects = PopulationBuilder::new(100, config.seed).build();
//! let mut sim = SimBuilder::new(config, NoopCanvas).subjects(subjects).build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod canvas;
pub mod collision;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use canvas::{Canvas, CanvasColor, DrawCommand, NoopCanvas, RecordingCanvas};
pub use error::{SimError, SimResult};
pub use observer::{InfectionSeries, NoopObserver, SimObserver};
pub use sim::{Sim, StopHandle};

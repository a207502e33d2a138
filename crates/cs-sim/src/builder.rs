//! Fluent builder for constructing a [`Sim`].

use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use cs_core::{SimConfig, SubjectId};
use cs_movement::StrategyTable;
use cs_subject::Subject;

use crate::canvas::Canvas;
use crate::sim::validate_subject;
use crate::{Sim, SimResult};

/// Fluent builder for [`Sim<C>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: arena size, tick interval, reporting intervals
/// - `C: Canvas`: the rendering surface (e.g. [`NoopCanvas`][crate::NoopCanvas])
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                      |
/// |-------------------|------------------------------|
/// | `.subjects(v)`    | Empty population             |
/// | `.strategies(t)`  | `StrategyTable::standard()`  |
///
/// # Example
///
/// ```rust,ignore
/// let subjects = PopulationBuilder::new(100, config.seed).build();
/// let mut sim = SimBuilder::new(config, NoopCanvas)
///     .subjects(subjects)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<C: Canvas> {
    config:     SimConfig,
    canvas:     C,
    subjects:   Vec<Subject>,
    strategies: Option<StrategyTable>,
}

impl<C: Canvas> SimBuilder<C> {
    pub fn new(config: SimConfig, canvas: C) -> Self {
        Self {
            config,
            canvas,
            subjects:   Vec::new(),
            strategies: None,
        }
    }

    /// Supply the starting population.  Replaces anything supplied earlier.
    pub fn subjects(mut self, subjects: Vec<Subject>) -> Self {
        self.subjects = subjects;
        self
    }

    /// Supply the strategy table subjects' handles point into.
    pub fn strategies(mut self, strategies: StrategyTable) -> Self {
        self.strategies = Some(strategies);
        self
    }

    /// Validate the configuration and every subject, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<C>> {
        self.config.validate()?;

        let strategies = self.strategies.unwrap_or_else(StrategyTable::standard);
        for (i, subject) in self.subjects.iter().enumerate() {
            validate_subject(SubjectId(i as u32), subject, &strategies)?;
        }

        Ok(Sim {
            clock:      self.config.make_clock(),
            config:     self.config,
            canvas:     self.canvas,
            subjects:   self.subjects,
            strategies,
            running:    Arc::new(AtomicBool::new(false)),
        })
    }
}

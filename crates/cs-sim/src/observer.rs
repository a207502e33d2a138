//! Simulation observer trait for statistics reporting and data collection.

use cs_core::Tick;
use cs_subject::Subject;

/// Callbacks invoked by [`Sim::tick`][crate::Sim::tick] and
/// [`Sim::run`][crate::Sim::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: infection printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl SimObserver for Printer {
///     fn on_infected_sample(&mut self, sample: u64, infected: usize) {
///         println!("sample {sample}: {infected} infected");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the start of each tick, after the tick counter advanced.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with the number of subjects that were
    /// infected during its movement pass.
    fn on_tick_end(&mut self, _tick: Tick, _infected: usize) {}

    /// The statistics feed: called every `config.report_interval_ticks`
    /// ticks.  `sample` starts at 1 and increases by one per report.
    fn on_infected_sample(&mut self, _sample: u64, _infected: usize) {}

    /// Called every `config.snapshot_interval_ticks` ticks (never when the
    /// interval is 0) with read-only access to the whole population.
    fn on_snapshot(&mut self, _tick: Tick, _subjects: &[Subject]) {}

    /// Called once when [`Sim::run`][crate::Sim::run] returns.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Keeps every infection sample in memory as `(sample, infected)` pairs.
#[derive(Default, Debug)]
pub struct InfectionSeries {
    pub samples: Vec<(u64, usize)>,
}

impl InfectionSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highest infected count seen so far.
    pub fn peak(&self) -> Option<(u64, usize)> {
        self.samples.iter().copied().max_by_key(|&(_, n)| n)
    }
}

impl SimObserver for InfectionSeries {
    fn on_infected_sample(&mut self, sample: u64, infected: usize) {
        self.samples.push((sample, infected));
    }
}

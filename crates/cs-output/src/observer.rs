//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use cs_core::{SimConfig, Tick};
use cs_sim::SimObserver;
use cs_subject::Subject;
use tracing::warn;

use crate::row::{InfectionSampleRow, SubjectSnapshotRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes infection samples and subject snapshots to
/// any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:          W,
    report_interval: u64,
    last_error:      Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`; `config` supplies the report
    /// interval used to turn sample indices back into ticks.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            report_interval: config.report_interval_ticks,
            last_error:      None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_infected_sample(&mut self, sample: u64, infected: usize) {
        let row = InfectionSampleRow {
            sample,
            tick: sample * self.report_interval,
            infected: infected as u64,
        };
        let result = self.writer.write_sample(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, subjects: &[Subject]) {
        let rows: Vec<SubjectSnapshotRow> = subjects
            .iter()
            .enumerate()
            .map(|(i, s)| SubjectSnapshotRow::from_subject(i as u32, tick, s))
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}

//! The `OutputWriter` trait implemented by all backend writers.

use crate::{InfectionSampleRow, OutputResult, SubjectSnapshotRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// Errors never reach the simulation: [`SimOutputObserver`][crate::SimOutputObserver]
/// stores them and hands them out through `take_error`.
pub trait OutputWriter {
    /// Write one infection sample.
    fn write_sample(&mut self, row: &InfectionSampleRow) -> OutputResult<()>;

    /// Write a batch of subject snapshots.
    fn write_snapshots(&mut self, rows: &[SubjectSnapshotRow]) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `infection_samples.csv`
//! - `subject_snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{InfectionSampleRow, OutputResult, SubjectSnapshotRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    samples:   Writer<File>,
    snapshots: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut samples = Writer::from_path(dir.join("infection_samples.csv"))?;
        samples.write_record(["sample", "tick", "infected"])?;

        let mut snapshots = Writer::from_path(dir.join("subject_snapshots.csv"))?;
        snapshots.write_record(["subject_id", "tick", "x", "y", "state"])?;

        Ok(Self {
            samples,
            snapshots,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_sample(&mut self, row: &InfectionSampleRow) -> OutputResult<()> {
        self.samples.write_record(&[
            row.sample.to_string(),
            row.tick.to_string(),
            row.infected.to_string(),
        ])?;
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[SubjectSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.subject_id.to_string(),
                row.tick.to_string(),
                format!("{:.3}", row.x),
                format!("{:.3}", row.y),
                row.state.to_owned(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.samples.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}

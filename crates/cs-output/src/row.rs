//! Plain data row types written by output backends.

use cs_core::Tick;
use cs_subject::Subject;

/// One point of the infection time series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfectionSampleRow {
    /// 1-based sample index (`tick / report_interval_ticks`).
    pub sample:   u64,
    pub tick:     u64,
    pub infected: u64,
}

/// Position and health of one subject at a given tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubjectSnapshotRow {
    pub subject_id: u32,
    pub tick:       u64,
    pub x:          f64,
    pub y:          f64,
    /// `"susceptible"`, `"infected"`, or `"immune"`.
    pub state:      &'static str,
}

impl SubjectSnapshotRow {
    pub fn from_subject(subject_id: u32, tick: Tick, subject: &Subject) -> Self {
        Self {
            subject_id,
            tick:  tick.0,
            x:     subject.x(),
            y:     subject.y(),
            state: subject.state().as_str(),
        }
    }
}

//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `infection_samples` and `subject_snapshots`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{InfectionSampleRow, OutputResult, SubjectSnapshotRow};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS infection_samples (
                 sample   INTEGER PRIMARY KEY,
                 tick     INTEGER NOT NULL,
                 infected INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS subject_snapshots (
                 subject_id INTEGER NOT NULL,
                 tick       INTEGER NOT NULL,
                 x          REAL    NOT NULL,
                 y          REAL    NOT NULL,
                 state      TEXT    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_sample(&mut self, row: &InfectionSampleRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO infection_samples (sample, tick, infected) VALUES (?1, ?2, ?3)",
            rusqlite::params![row.sample, row.tick, row.infected],
        )?;
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[SubjectSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO subject_snapshots (subject_id, tick, x, y, state) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![row.subject_id, row.tick, row.x, row.y, row.state])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}

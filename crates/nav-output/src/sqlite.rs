//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `trajectory` and `firing_rates`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{OutputResult, RateRow, TrajectoryRow};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn: Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS trajectory (
                 step   INTEGER PRIMARY KEY,
                 t_secs REAL NOT NULL,
                 x      REAL NOT NULL,
                 y      REAL NOT NULL
             );
             CREATE TABLE IF NOT EXISTS firing_rates (
                 step       INTEGER NOT NULL,
                 t_secs     REAL    NOT NULL,
                 population TEXT    NOT NULL,
                 cell_id    INTEGER NOT NULL,
                 rate       REAL    NOT NULL
             );",
        )?;

        Ok(Self {
            conn,
            finished: false,
        })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_trajectory(&mut self, row: &TrajectoryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO trajectory (step, t_secs, x, y) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![row.step, row.t_secs, row.x, row.y],
        )?;
        Ok(())
    }

    fn write_rates(&mut self, rows: &[RateRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO firing_rates (step, t_secs, population, cell_id, rate) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.step,
                    row.t_secs,
                    row.population,
                    row.cell_id,
                    row.rate,
                ])?;
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

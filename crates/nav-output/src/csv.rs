//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `trajectory.csv`
//! - `firing_rates.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, RateRow, TrajectoryRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    trajectory: Writer<File>,
    rates: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut trajectory = Writer::from_path(dir.join("trajectory.csv"))?;
        trajectory.write_record(["step", "t_secs", "x", "y"])?;

        let mut rates = Writer::from_path(dir.join("firing_rates.csv"))?;
        rates.write_record(["step", "t_secs", "population", "cell_id", "rate"])?;

        Ok(Self {
            trajectory,
            rates,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_trajectory(&mut self, row: &TrajectoryRow) -> OutputResult<()> {
        self.trajectory.write_record(&[
            row.step.to_string(),
            row.t_secs.to_string(),
            row.x.to_string(),
            row.y.to_string(),
        ])?;
        Ok(())
    }

    fn write_rates(&mut self, rows: &[RateRow]) -> OutputResult<()> {
        for row in rows {
            self.rates.write_record(&[
                row.step.to_string(),
                row.t_secs.to_string(),
                row.population.clone(),
                row.cell_id.to_string(),
                row.rate.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trajectory.flush()?;
        self.rates.flush()?;
        Ok(())
    }
}

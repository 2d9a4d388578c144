//! Parquet output backend (feature `parquet`).
//!
//! Creates two files in the configured output directory:
//! - `trajectory.parquet`
//! - `firing_rates.parquet`

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{Float64Builder, StringBuilder, UInt32Builder, UInt64Builder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::writer::OutputWriter;
use crate::{OutputResult, RateRow, TrajectoryRow};

fn trajectory_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("step",   DataType::UInt64,  false),
        Field::new("t_secs", DataType::Float64, false),
        Field::new("x",      DataType::Float64, false),
        Field::new("y",      DataType::Float64, false),
    ]))
}

fn rate_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("step",       DataType::UInt64,  false),
        Field::new("t_secs",     DataType::Float64, false),
        Field::new("population", DataType::Utf8,    false),
        Field::new("cell_id",    DataType::UInt32,  false),
        Field::new("rate",       DataType::Float64, false),
    ]))
}

fn snappy_props() -> WriterProperties {
    WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build()
}

/// Writes simulation output to two Parquet files.
///
/// `finish()` **must** be called to write the Parquet file footer; files
/// written without calling `finish()` cannot be opened by Parquet readers.
pub struct ParquetWriter {
    trajectory: Option<ArrowWriter<File>>,
    rates: Option<ArrowWriter<File>>,
    traj_schema: Arc<Schema>,
    rate_schema: Arc<Schema>,
}

impl ParquetWriter {
    /// Create both Parquet files in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let traj_schema = trajectory_schema();
        let rate_schema = rate_schema();

        let traj_file = File::create(dir.join("trajectory.parquet"))?;
        let trajectory =
            ArrowWriter::try_new(traj_file, Arc::clone(&traj_schema), Some(snappy_props()))?;

        let rate_file = File::create(dir.join("firing_rates.parquet"))?;
        let rates =
            ArrowWriter::try_new(rate_file, Arc::clone(&rate_schema), Some(snappy_props()))?;

        Ok(Self {
            trajectory: Some(trajectory),
            rates: Some(rates),
            traj_schema,
            rate_schema,
        })
    }
}

impl OutputWriter for ParquetWriter {
    fn write_trajectory(&mut self, row: &TrajectoryRow) -> OutputResult<()> {
        let Some(writer) = self.trajectory.as_mut() else {
            return Ok(());
        };

        let mut steps = UInt64Builder::new();
        let mut times = Float64Builder::new();
        let mut xs = Float64Builder::new();
        let mut ys = Float64Builder::new();

        steps.append_value(row.step);
        times.append_value(row.t_secs);
        xs.append_value(row.x);
        ys.append_value(row.y);

        let batch = RecordBatch::try_new(
            Arc::clone(&self.traj_schema),
            vec![
                Arc::new(steps.finish()),
                Arc::new(times.finish()),
                Arc::new(xs.finish()),
                Arc::new(ys.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn write_rates(&mut self, rows: &[RateRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.rates.as_mut() else {
            return Ok(());
        };

        let mut steps = UInt64Builder::new();
        let mut times = Float64Builder::new();
        let mut populations = StringBuilder::new();
        let mut cell_ids = UInt32Builder::new();
        let mut rates = Float64Builder::new();

        for row in rows {
            steps.append_value(row.step);
            times.append_value(row.t_secs);
            populations.append_value(&row.population);
            cell_ids.append_value(row.cell_id);
            rates.append_value(row.rate);
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.rate_schema),
            vec![
                Arc::new(steps.finish()),
                Arc::new(times.finish()),
                Arc::new(populations.finish()),
                Arc::new(cell_ids.finish()),
                Arc::new(rates.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if let Some(w) = self.trajectory.take() {
            w.close()?;
        }
        if let Some(w) = self.rates.take() {
            w.close()?;
        }
        Ok(())
    }
}

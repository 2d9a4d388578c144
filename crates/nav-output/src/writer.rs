//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, RateRow, TrajectoryRow};

/// Trait implemented by CSV, SQLite, and Parquet writers.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with [`SimOutputObserver::take_error`].
///
/// [`SimOutputObserver::take_error`]: crate::SimOutputObserver::take_error
pub trait OutputWriter {
    /// Write one trajectory sample.
    fn write_trajectory(&mut self, row: &TrajectoryRow) -> OutputResult<()>;

    /// Write a batch of firing-rate rows (one per cell).
    fn write_rates(&mut self, rows: &[RateRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

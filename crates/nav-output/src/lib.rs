//! `nav-output` — simulation output writers for the rust_nav framework.
//!
//! Three backends are provided behind Cargo features:
//!
//! | Feature   | Backend | Files created                               |
//! |-----------|---------|---------------------------------------------|
//! | *(none)*  | CSV     | `trajectory.csv`, `firing_rates.csv`        |
//! | `sqlite`  | SQLite  | `output.db`                                 |
//! | `parquet` | Parquet | `trajectory.parquet`, `firing_rates.parquet`|
//!
//! All backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `nav_sim::SimObserver`.
//!
//! Firing rates are written in long format: one row per cell per snapshot,
//! keyed by (step, population, cell_id).  Long rows are trivially filtered
//! and pivoted downstream, and keep the schema fixed regardless of how many
//! cells a population has.
//!
//! # Usage
//!
//! ```rust,ignore
//! use nav_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs).unwrap();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "parquet")]
pub mod parquet;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{RateRow, TrajectoryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;

#[cfg(feature = "parquet")]
pub use parquet::ParquetWriter;

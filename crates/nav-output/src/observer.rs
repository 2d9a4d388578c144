//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use nav_agent::Agent;
use nav_cells::RatePopulation;
use nav_core::Step;
use nav_sim::SimObserver;

use crate::row::{RateRow, TrajectoryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes trajectory samples and firing-rate rows to
/// any [`OutputWriter`] backend (CSV, SQLite, Parquet, …).
///
/// At every snapshot it records the agent's current position and, for each
/// population, the most recently logged rate vector.  Set
/// `snapshot_interval_steps = 1` in the sim config to capture every step.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer: W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
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

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_snapshot(&mut self, step: Step, agent: &Agent, populations: &[RatePopulation]) {
        let t_secs = agent.time();
        let pos = agent.pos();

        let result = self.writer.write_trajectory(&TrajectoryRow {
            step: step.0,
            t_secs,
            x: pos.x,
            y: pos.y,
        });
        self.store_err(result);

        for pop in populations {
            let Some(rates) = pop.history().rate_vectors().last() else {
                continue;
            };
            let rows: Vec<RateRow> = rates
                .iter()
                .enumerate()
                .map(|(i, &rate)| RateRow {
                    step: step.0,
                    t_secs,
                    population: pop.name().to_owned(),
                    cell_id: i as u32,
                    rate,
                })
                .collect();
            let result = self.writer.write_rates(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_step: Step) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}

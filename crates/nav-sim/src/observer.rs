//! Simulation observer trait for progress reporting and data collection.

use nav_agent::Agent;
use nav_cells::RatePopulation;
use nav_core::{Point, Step};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// step loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_step_end(&mut self, step: Step, pos: Point) {
///         if step.0 % self.interval == 0 {
///             println!("step {step}: agent at {pos}");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each step, before the agent moves.
    fn on_step_start(&mut self, _step: Step) {}

    /// Called at the end of each step.
    ///
    /// `pos` is the agent's position after this step's update, i.e. the
    /// position every population just fired against.
    fn on_step_end(&mut self, _step: Step, _pos: Point) {}

    /// Called at snapshot intervals (every `config.snapshot_interval_steps`
    /// steps; never if that is 0).
    ///
    /// Provides read-only access to the agent and all populations so output
    /// writers can record state without the sim knowing about any specific
    /// output format.
    fn on_snapshot(&mut self, _step: Step, _agent: &Agent, _populations: &[RatePopulation]) {}

    /// Called once after the final step completes.
    fn on_sim_end(&mut self, _final_step: Step) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

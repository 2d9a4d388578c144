//! The `Sim` struct and its step loop.

use nav_agent::Agent;
use nav_cells::RatePopulation;
use nav_core::{SimClock, SimConfig};

use crate::{SimObserver, SimResult};

/// The main simulation runner.
///
/// `Sim` holds the agent and its cell populations and drives the step loop:
///
/// 1. **Agent**: [`Agent::update`] advances the OU velocity, projects the
///    proposed position through the environment boundary, and appends to
///    the position history.
/// 2. **Cells**: each population's [`update`][RatePopulation::update] is
///    called with the position from step 1, in registration order.
/// 3. **Hooks**: observer callbacks fire at the step boundary and at
///    snapshot intervals.
///
/// After `steps()` iterations the agent history and every population history
/// all have exactly `steps()` entries, and entry `i` of each refers to the
/// same moment in simulated time.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Global configuration (duration, dt, seed, snapshot interval).
    pub config: SimConfig,

    /// Simulation clock — tracks the current step and maps to seconds.
    pub clock: SimClock,

    /// The moving agent.  Owns its position/velocity history.
    pub agent: Agent,

    /// Rate-unit populations, updated after the agent every step.
    pub populations: Vec<RatePopulation>,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current step to `config.end_step()`.
    ///
    /// Calls observer hooks at every step boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        loop {
            let now = self.clock.current_step;
            if now >= self.config.end_step() {
                break;
            }
            self.process_step(observer);
            self.clock.advance();
        }
        observer.on_sim_end(self.clock.current_step);
        Ok(())
    }

    /// Run exactly `n` steps from the current position (ignores `end_step`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_steps<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.process_step(observer);
            self.clock.advance();
        }
        Ok(())
    }

    /// The environment everything lives in.
    #[inline]
    pub fn environment(&self) -> &std::sync::Arc<nav_env::Environment> {
        self.agent.environment()
    }

    // ── Core step processing ──────────────────────────────────────────────

    fn process_step<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_step;
        observer.on_step_start(now);

        // Agent first.  Populations must see this step's position, not the
        // previous one.
        self.agent.update();
        let pos = self.agent.pos();
        for pop in &mut self.populations {
            pop.update(pos);
        }

        observer.on_step_end(now, pos);
        if self.config.snapshot_interval_steps > 0
            && now.0.is_multiple_of(self.config.snapshot_interval_steps)
        {
            observer.on_snapshot(now, &self.agent, &self.populations);
        }
    }
}

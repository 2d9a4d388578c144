//! Fluent builder for constructing a [`Sim`].

use nav_agent::Agent;
use nav_cells::RatePopulation;
use nav_core::SimConfig;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`] — duration, dt, seed, snapshot interval
/// - [`Agent`] — constructed against the shared environment
///
/// # Optional inputs
///
/// | Method             | Default         |
/// |--------------------|-----------------|
/// | `.population(p)`   | no populations  |
/// | `.populations(v)`  | no populations  |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, agent)
///     .population(RatePopulation::new("place_cells", pcs))
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config: SimConfig,
    agent: Agent,
    populations: Vec<RatePopulation>,
}

impl SimBuilder {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, agent: Agent) -> Self {
        Self {
            config,
            agent,
            populations: Vec::new(),
        }
    }

    /// Register one population.  Populations update in registration order.
    pub fn population(mut self, population: RatePopulation) -> Self {
        self.populations.push(population);
        self
    }

    /// Register several populations at once.
    pub fn populations(mut self, populations: Vec<RatePopulation>) -> Self {
        self.populations.extend(populations);
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    ///
    /// Rejects an agent whose integration `dt` differs from the configured
    /// `dt_secs`: the two are integrated by different components, and a
    /// mismatch would silently desynchronise history timestamps from the
    /// clock.  Also rejects empty populations — a zero-cell population would
    /// log empty rate vectors forever — and populations whose model demands
    /// a dimensionality the agent's environment does not have.
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        if self.agent.dt() != self.config.dt_secs {
            return Err(SimError::DtMismatch {
                config_dt: self.config.dt_secs,
                agent_dt: self.agent.dt(),
            });
        }
        if let Some(empty) = self.populations.iter().find(|p| p.is_empty()) {
            return Err(SimError::EmptyPopulation {
                name: empty.name().to_owned(),
            });
        }
        let actual = self.agent.environment().dims();
        for pop in &self.populations {
            if let Some(required) = pop.model().required_dims()
                && required != actual
            {
                return Err(SimError::DimensionalityMismatch {
                    name: pop.name().to_owned(),
                    required,
                    actual,
                });
            }
        }

        Ok(Sim {
            clock: self.config.make_clock(),
            config: self.config,
            agent: self.agent,
            populations: self.populations,
        })
    }
}

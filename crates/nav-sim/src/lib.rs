//! `nav-sim` — step loop driver for the rust_nav framework.
//!
//! # The step loop
//!
//! ```text
//! for step in 0..config.steps():
//!   ① Agent  — agent.update(): OU velocity step, boundary projection,
//!              position history append.
//!   ② Cells  — pop.update(agent.pos()) for every population, in
//!              registration order, with the position produced in ①.
//!   ③ Hooks  — observer.on_step_end, plus on_snapshot every
//!              config.snapshot_interval_steps steps.
//! ```
//!
//! Populations receive the agent's position as an explicit argument, so the
//! "agent moves, then cells fire" ordering is enforced here in one place
//! rather than implied by object wiring.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use nav_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(config, agent)
//!     .population(RatePopulation::new("place_cells", pcs))
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;

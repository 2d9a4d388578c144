//! `nav-agent` — the moving agent for the rust_nav framework.
//!
//! An [`Agent`] holds a position and velocity inside a shared
//! [`Environment`][nav_env::Environment] and advances itself one `dt` per
//! [`update`][Agent::update] call.  Motion is a smooth random walk: an
//! Ornstein–Uhlenbeck process on speed (1D) or on rotational velocity and
//! speed (2D), with candidate positions projected through the environment's
//! boundary policy.
//!
//! Every update appends exactly one entry to the agent's [`AgentHistory`]
//! (time, position, measured velocity), so after `N` updates the history
//! length is exactly `N`.

pub mod agent;
pub mod error;
pub mod history;
pub mod motion;
pub mod params;


pub use agent::Agent;
pub use error::{AgentError, AgentResult};
pub use history::AgentHistory;
pub use params::AgentParams;

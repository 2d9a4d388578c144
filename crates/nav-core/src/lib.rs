//! `nav-core` — foundational types for the `rust_nav` spatial navigation
//! framework.
//!
//! This crate is a dependency of every other `nav-*` crate.  It intentionally
//! has no `nav-*` dependencies and minimal external ones (only `rand`,
//! `rand_distr`, and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `CellId`                                              |
//! | [`point`]   | `Point`, planar vector arithmetic                     |
//! | [`time`]    | `Step`, `SimClock`, `SimConfig`                       |
//! | [`rng`]     | `ComponentRng` (per-component), `SimRng` (global)     |
//! | [`error`]   | `NavError`, `NavResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod point;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{NavError, NavResult};
pub use ids::CellId;
pub use point::Point;
pub use rng::{ComponentRng, SimRng};
pub use time::{SimClock, SimConfig, Step};

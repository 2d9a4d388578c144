//! Plain data row types written by output backends.

/// One sample of the agent's trajectory.
///
/// In a 1D environment `y` is always 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryRow {
    pub step: u64,
    /// Simulated seconds at the end of this step.
    pub t_secs: f64,
    pub x: f64,
    pub y: f64,
}

/// One cell's firing rate at one snapshot (long format).
#[derive(Debug, Clone, PartialEq)]
pub struct RateRow {
    pub step: u64,
    pub t_secs: f64,
    /// Population label, as given to `RatePopulation::new`.
    pub population: String,
    pub cell_id: u32,
    pub rate: f64,
}

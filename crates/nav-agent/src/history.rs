//! Append-only position history.

use nav_core::Point;

/// Ordered log of the agent's state, one entry per completed `update()`.
///
/// All three logs always have equal length.  The initial (pre-update) state
/// is deliberately *not* recorded, so `len()` equals the number of updates
/// performed — reporting code can rely on `len == steps` exactly.
#[derive(Clone, Debug, Default)]
pub struct AgentHistory {
    t: Vec<f64>,
    pos: Vec<Point>,
    vel: Vec<Point>,
}

impl AgentHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded entries (== number of updates).
    #[inline]
    pub fn len(&self) -> usize {
        self.pos.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos.is_empty()
    }

    /// Simulated time of each entry, seconds.
    #[inline]
    pub fn times(&self) -> &[f64] {
        &self.t
    }

    /// Post-update positions.
    #[inline]
    pub fn positions(&self) -> &[Point] {
        &self.pos
    }

    /// Measured velocities (post-projection displacement / dt).
    #[inline]
    pub fn velocities(&self) -> &[Point] {
        &self.vel
    }

    /// The first `n` positions (or all of them, if fewer).
    ///
    /// Borrowed, read-only, and idempotent: calling twice without an
    /// intervening update returns identical slices.
    pub fn head_positions(&self, n: usize) -> &[Point] {
        &self.pos[..n.min(self.pos.len())]
    }

    /// Append one entry to every log.  Called exactly once per update.
    pub(crate) fn record(&mut self, t: f64, pos: Point, vel: Point) {
        self.t.push(t);
        self.pos.push(pos);
        self.vel.push(vel);
        debug_assert!(self.t.len() == self.pos.len() && self.pos.len() == self.vel.len());
    }

    /// Discard all recorded entries.
    pub fn clear(&mut self) {
        self.t.clear();
        self.pos.clear();
        self.vel.clear();
    }
}

//! `RatePopulation` — a cell model plus its firing-rate history.

use nav_core::Point;

use crate::model::RateModel;

/// Append-only log of per-step rate vectors (the `firingrate` history).
///
/// Like the agent's history, one entry is recorded per `update()` and none
/// at construction, so `len()` equals the number of completed steps.
#[derive(Clone, Debug, Default)]
pub struct RateHistory {
    rates: Vec<Vec<f64>>,
}

impl RateHistory {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// One rate vector per step, oldest first.
    #[inline]
    pub fn rate_vectors(&self) -> &[Vec<f64>] {
        &self.rates
    }

    /// The first `n` rate vectors (or all of them, if fewer).
    ///
    /// Borrowed, read-only, and idempotent.
    pub fn head(&self, n: usize) -> &[Vec<f64>] {
        &self.rates[..n.min(self.rates.len())]
    }

    pub(crate) fn record(&mut self, rates: Vec<f64>) {
        self.rates.push(rates);
    }

    pub fn clear(&mut self) {
        self.rates.clear();
    }
}

/// A named population of rate units bound to one cell model.
///
/// The population does not hold a reference to the agent.  Its
/// [`update`][Self::update] receives the position explicitly, which makes
/// the required "agent first, cells second" ordering a property of the
/// *driver* rather than a hidden temporal coupling between objects.
pub struct RatePopulation {
    name: String,
    model: Box<dyn RateModel>,
    history: RateHistory,
}

impl RatePopulation {
    /// Wrap a model.  `name` labels output rows and diagnostics.
    pub fn new(name: impl Into<String>, model: impl RateModel) -> Self {
        Self {
            name: name.into(),
            model: Box::new(model),
            history: RateHistory::new(),
        }
    }

    /// Wrap an already-boxed model (e.g. from [`CellKind::build`]).
    ///
    /// [`CellKind::build`]: crate::CellKind::build
    pub fn from_boxed(name: impl Into<String>, model: Box<dyn RateModel>) -> Self {
        Self {
            name: name.into(),
            model,
            history: RateHistory::new(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of units.
    #[inline]
    pub fn len(&self) -> usize {
        self.model.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.model.is_empty()
    }

    #[inline]
    pub fn model(&self) -> &dyn RateModel {
        self.model.as_ref()
    }

    #[inline]
    pub fn history(&self) -> &RateHistory {
        &self.history
    }

    /// Compute one rate per unit at `pos` and append the vector to the
    /// history.  `pos` must be the agent's *post-update* position for this
    /// step; the driver guarantees that by sequencing.
    pub fn update(&mut self, pos: Point) {
        let rates = self.model.rates(pos);
        self.history.record(rates);
    }

    /// Rates for `pos` without recording — for probing and rate maps.
    pub fn probe(&self, pos: Point) -> Vec<f64> {
        self.model.rates(pos)
    }
}

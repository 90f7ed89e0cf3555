//! Per-bridge durations and the grand total for a crossing run.

use std::collections::BTreeMap;

use crate::{BridgeId, crossing::BridgeCrossing};

/// Durations produced by [`simulate`](crate::crossing::simulate).
///
/// Durations are keyed by bridge id. `total` is accumulated bridge by bridge
/// in crossing order and always equals the sum of the recorded durations.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CrossingReport {
    durations: BTreeMap<BridgeId, f64>,
    total: f64,
    crossings: Vec<BridgeCrossing>,
}

impl CrossingReport {
    /// Durations keyed by bridge id.
    #[must_use]
    pub const fn durations(&self) -> &BTreeMap<BridgeId, f64> {
        &self.durations
    }

    /// Duration recorded for `id`, if that bridge was crossed.
    #[must_use]
    pub fn duration(&self, id: BridgeId) -> Option<f64> {
        self.durations.get(&id).copied()
    }

    /// Sum of every bridge duration.
    #[must_use]
    pub const fn total(&self) -> f64 {
        self.total
    }

    /// Detailed crossings in the order the bridges were crossed.
    #[must_use]
    pub fn crossings(&self) -> &[BridgeCrossing] {
        &self.crossings
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "the total is a running sum of bridge durations"
    )]
    pub(crate) fn record(&mut self, crossing: BridgeCrossing) {
        self.durations.insert(crossing.bridge(), crossing.duration());
        self.total += crossing.duration();
        self.crossings.push(crossing);
    }
}

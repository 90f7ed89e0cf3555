//! Greedy torch-ferry simulation across a sequence of rope bridges.
//!
//! At every bridge the fastest waiting hiker escorts the slowest one across,
//! then runs the torch back alone while more than one hiker is still waiting.
//! The waiting [`Pool`] is threaded from one bridge to the next as a plain
//! value: [`cross_bridge`] consumes the pool it is given and hands back the
//! pool for the following bridge, and [`simulate`] folds it over the whole
//! route.
//!
//! Only the hiker left holding the torch (the fastest) carries forward to
//! the next bridge. Everyone ferried across is finished and never waits at a
//! later bridge.

mod error;

use std::collections::BTreeSet;

use log::{debug, info, warn};

use crate::{Bridge, BridgeId, CrossingReport, Hiker, pace};

pub use error::CrossingError;

/// Hikers who have joined the crossing but not yet crossed the current
/// bridge.
///
/// # Examples
/// ```
/// use ropebridge_core::{Hiker, crossing::Pool};
///
/// # fn main() -> Result<(), ropebridge_core::HikerError> {
/// let pool = Pool::from_hikers(vec![Hiker::new("A", 2.0)?]);
/// assert_eq!(pool.len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pool {
    hikers: Vec<Hiker>,
}

impl Pool {
    /// Construct an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a pool holding `hikers` in the given order.
    #[must_use]
    pub const fn from_hikers(hikers: Vec<Hiker>) -> Self {
        Self { hikers }
    }

    /// Waiting hikers.
    #[must_use]
    pub fn hikers(&self) -> &[Hiker] {
        &self.hikers
    }

    /// Number of waiting hikers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hikers.len()
    }

    /// Whether nobody is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hikers.is_empty()
    }

    /// Append newcomers after the hikers already waiting.
    pub fn join(&mut self, newcomers: &[Hiker]) {
        self.hikers.extend_from_slice(newcomers);
    }
}

/// One span walked while crossing a bridge.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "direction", rename_all = "snake_case")
)]
pub enum Trip {
    /// The fastest hiker escorts `ferried` across at `ferried`'s pace.
    Over {
        /// Hiker escorted across.
        ferried: Hiker,
        /// Bridge time once this trip completes.
        elapsed: f64,
    },
    /// The fastest hiker walks the torch back alone.
    Back {
        /// Hiker carrying the torch back.
        runner: Hiker,
        /// Bridge time once this trip completes.
        elapsed: f64,
    },
}

impl Trip {
    /// Bridge time once this trip completes.
    #[must_use]
    pub const fn elapsed(&self) -> f64 {
        match self {
            Self::Over { elapsed, .. } | Self::Back { elapsed, .. } => *elapsed,
        }
    }
}

/// Outcome of crossing a single bridge.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BridgeCrossing {
    bridge: BridgeId,
    length: f64,
    waiting: usize,
    fastest: Option<Hiker>,
    trips: Vec<Trip>,
    duration: f64,
}

impl BridgeCrossing {
    /// Bridge that was crossed.
    #[must_use]
    pub const fn bridge(&self) -> BridgeId {
        self.bridge
    }

    /// Length of the bridge.
    #[must_use]
    pub const fn length(&self) -> f64 {
        self.length
    }

    /// Number of hikers waiting when the bridge was reached.
    #[must_use]
    pub const fn waiting(&self) -> usize {
        self.waiting
    }

    /// Hiker chosen to ferry everyone else, if anybody was waiting.
    #[must_use]
    pub const fn fastest(&self) -> Option<&Hiker> {
        self.fastest.as_ref()
    }

    /// Trips in the order they were walked.
    #[must_use]
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    /// Total time spent on this bridge.
    #[must_use]
    pub const fn duration(&self) -> f64 {
        self.duration
    }
}

/// Cross one bridge starting from `pool`.
///
/// Newcomers from `bridge` join the pool, the pool is re-sorted by pace and
/// the fastest hiker is fixed for the whole bridge. Returns the crossing and
/// the pool waiting at the next bridge, which holds at most the fastest
/// hiker.
///
/// # Examples
/// ```
/// use ropebridge_core::{Bridge, BridgeId, Hiker, crossing::{Pool, cross_bridge}};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let bridge = Bridge::new(
///     BridgeId::new(0),
///     10.0,
///     vec![Hiker::new("A", 2.0)?, Hiker::new("B", 1.0)?],
/// )?;
/// let (crossing, next) = cross_bridge(Pool::new(), &bridge);
/// assert_eq!(crossing.duration(), 10.0);
/// assert_eq!(next.hikers()[0].name(), "A");
/// # Ok(())
/// # }
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "bridge time accumulates per-trip crossing times"
)]
pub fn cross_bridge(pool: Pool, bridge: &Bridge) -> (BridgeCrossing, Pool) {
    let mut waiting = pool;
    waiting.join(bridge.hikers());
    pace::sort_by_pace(&mut waiting.hikers);

    let length = bridge.length();
    let mut crossing = BridgeCrossing {
        bridge: bridge.id(),
        length,
        waiting: waiting.len(),
        fastest: pace::fastest(waiting.hikers()).cloned(),
        trips: Vec::new(),
        duration: 0.0,
    };
    let Some(fastest) = crossing.fastest.clone() else {
        warn!("bridge {} has no hikers waiting to cross", bridge.id());
        return (crossing, waiting);
    };
    debug!(
        "bridge {}: fastest hiker is {} with a pace of {}",
        bridge.id(),
        fastest.name(),
        fastest.pace()
    );

    let mut elapsed = 0.0;
    while waiting.len() > 1 {
        let Some(ferried) = waiting.hikers.pop() else {
            break;
        };
        elapsed += ferried.time_to_cross(length);
        debug!(
            "bridge {}: {} crossed (pace {}), bridge time {elapsed}",
            bridge.id(),
            ferried.name(),
            ferried.pace()
        );
        crossing.trips.push(Trip::Over { ferried, elapsed });

        if waiting.len() > 1 {
            elapsed += fastest.time_to_cross(length);
            debug!(
                "bridge {}: {} crossed back, bridge time {elapsed}",
                bridge.id(),
                fastest.name()
            );
            crossing.trips.push(Trip::Back {
                runner: fastest.clone(),
                elapsed,
            });
        }
    }

    crossing.duration = elapsed;
    info!("bridge {} crossed in {elapsed}", bridge.id());
    (crossing, waiting)
}

/// Cross every bridge in input order and collect the durations.
///
/// # Errors
/// Returns [`CrossingError`] when bridge ids are repeated or fall outside
/// `0..bridges.len()`. Ids are checked before any bridge is crossed.
///
/// # Examples
/// ```
/// use ropebridge_core::{Bridge, BridgeId, Hiker, crossing::simulate};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let bridges = vec![Bridge::new(
///     BridgeId::new(0),
///     10.0,
///     vec![Hiker::new("A", 2.0)?, Hiker::new("B", 1.0)?],
/// )?];
/// let report = simulate(&bridges)?;
/// assert_eq!(report.total(), 10.0);
/// # Ok(())
/// # }
/// ```
pub fn simulate(bridges: &[Bridge]) -> Result<CrossingReport, CrossingError> {
    check_bridge_ids(bridges)?;
    let (report, _) = bridges.iter().fold(
        (CrossingReport::default(), Pool::new()),
        |(mut report, pool), bridge| {
            let (crossing, next) = cross_bridge(pool, bridge);
            report.record(crossing);
            (report, next)
        },
    );
    info!(
        "crossed {} bridges in {}",
        report.durations().len(),
        report.total()
    );
    Ok(report)
}

fn check_bridge_ids(bridges: &[Bridge]) -> Result<(), CrossingError> {
    let count = bridges.len();
    let mut seen = BTreeSet::new();
    for bridge in bridges {
        let id = bridge.id();
        let in_range = usize::try_from(id.get()).is_ok_and(|slot| slot < count);
        if !in_range {
            return Err(CrossingError::BridgeIdOutOfRange { id, count });
        }
        if !seen.insert(id) {
            return Err(CrossingError::DuplicateBridgeId { id });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;

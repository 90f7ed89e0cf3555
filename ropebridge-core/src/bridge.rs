//! Bridges and the hikers who join the crossing at each one.

use std::fmt;

use thiserror::Error;

use crate::Hiker;

/// Identifier of a bridge, also used as its slot in a
/// [`CrossingReport`](crate::CrossingReport).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct BridgeId(u32);

impl BridgeId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Raw identifier.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for BridgeId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for BridgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A rope bridge of fixed length together with the hikers who first become
/// available at it.
///
/// Hikers listed here join the waiting pool when this bridge is reached;
/// hikers still waiting from earlier bridges are carried in the pool rather
/// than repeated here.
///
/// # Examples
/// ```
/// use ropebridge_core::{Bridge, BridgeId, Hiker};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let bridge = Bridge::new(
///     BridgeId::new(0),
///     100.0,
///     vec![Hiker::new("A", 100.0)?, Hiker::new("B", 50.0)?],
/// )?;
/// assert_eq!(bridge.hikers().len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Bridge {
    id: BridgeId,
    length: f64,
    hikers: Vec<Hiker>,
}

/// Errors returned by [`Bridge::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BridgeError {
    /// Length was NaN or infinite.
    #[error("length {length} is not a finite number")]
    NonFiniteLength {
        /// Rejected length.
        length: f64,
    },
    /// Length was zero or negative.
    #[error("length must be positive, got {length}")]
    NonPositiveLength {
        /// Rejected length.
        length: f64,
    },
}

impl Bridge {
    /// Validates and constructs a [`Bridge`].
    ///
    /// # Errors
    /// Returns [`BridgeError`] when `length` is not a finite positive number.
    pub fn new(id: BridgeId, length: f64, hikers: Vec<Hiker>) -> Result<Self, BridgeError> {
        if !length.is_finite() {
            return Err(BridgeError::NonFiniteLength { length });
        }
        if length <= 0.0 {
            return Err(BridgeError::NonPositiveLength { length });
        }
        Ok(Self { id, length, hikers })
    }

    /// Identifier of this bridge.
    #[must_use]
    pub const fn id(&self) -> BridgeId {
        self.id
    }

    /// Length of the span.
    #[must_use]
    pub const fn length(&self) -> f64 {
        self.length
    }

    /// Hikers who join the pool at this bridge, in input order.
    #[must_use]
    pub fn hikers(&self) -> &[Hiker] {
        &self.hikers
    }
}

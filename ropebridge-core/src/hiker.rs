//! Hikers waiting to cross a rope bridge.

use thiserror::Error;

/// A person crossing the bridges, identified by name and moving at a fixed
/// pace.
///
/// Pace is a rate: distance covered per unit of time. The crate does not fix
/// the units, but the command-line tool reads feet per minute.
///
/// # Examples
/// ```
/// use ropebridge_core::Hiker;
///
/// # fn main() -> Result<(), ropebridge_core::HikerError> {
/// let hiker = Hiker::new("Ada", 100.0)?;
/// assert_eq!(hiker.name(), "Ada");
/// assert_eq!(hiker.pace(), 100.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Hiker {
    name: String,
    pace: f64,
}

/// Errors returned by [`Hiker::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum HikerError {
    /// Pace was NaN or infinite.
    #[error("pace {pace} is not a finite number")]
    NonFinitePace {
        /// Rejected pace.
        pace: f64,
    },
    /// Pace was zero or negative.
    #[error("pace must be positive, got {pace}")]
    NonPositivePace {
        /// Rejected pace.
        pace: f64,
    },
}

impl Hiker {
    /// Validates and constructs a [`Hiker`].
    ///
    /// # Errors
    /// Returns [`HikerError`] when `pace` is not a finite positive number;
    /// such a pace would make every crossing time infinite or negative.
    pub fn new(name: impl Into<String>, pace: f64) -> Result<Self, HikerError> {
        if !pace.is_finite() {
            return Err(HikerError::NonFinitePace { pace });
        }
        if pace <= 0.0 {
            return Err(HikerError::NonPositivePace { pace });
        }
        Ok(Self {
            name: name.into(),
            pace,
        })
    }

    /// Name as supplied by the caller.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Distance covered per unit of time.
    #[must_use]
    pub const fn pace(&self) -> f64 {
        self.pace
    }

    /// Time this hiker needs to walk `length` on their own.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "crossing time is length divided by pace"
    )]
    pub fn time_to_cross(&self, length: f64) -> f64 {
        length / self.pace
    }
}

//! Ordering hikers from fastest to slowest.
//!
//! Hikers with exactly equal pace keep their input order. This tie-break is
//! a chosen policy rather than something the crossing rules require; it
//! keeps the trip log reproducible for identical input.

use std::cmp::Ordering;

use crate::Hiker;

/// Compare two hikers so that the faster one sorts first.
///
/// # Examples
/// ```
/// use std::cmp::Ordering;
/// use ropebridge_core::{Hiker, pace::by_pace_descending};
///
/// # fn main() -> Result<(), ropebridge_core::HikerError> {
/// let quick = Hiker::new("quick", 3.0)?;
/// let slow = Hiker::new("slow", 1.0)?;
/// assert_eq!(by_pace_descending(&quick, &slow), Ordering::Less);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn by_pace_descending(a: &Hiker, b: &Hiker) -> Ordering {
    b.pace().total_cmp(&a.pace())
}

/// Sort hikers in place by descending pace.
///
/// The sort is stable, so equal-pace hikers retain their relative order and
/// sorting an already ordered slice leaves it untouched.
///
/// # Examples
/// ```
/// use ropebridge_core::{Hiker, pace::sort_by_pace};
///
/// # fn main() -> Result<(), ropebridge_core::HikerError> {
/// let mut hikers = vec![Hiker::new("B", 1.0)?, Hiker::new("A", 2.0)?];
/// sort_by_pace(&mut hikers);
/// assert_eq!(hikers[0].name(), "A");
/// # Ok(())
/// # }
/// ```
pub fn sort_by_pace(hikers: &mut [Hiker]) {
    hikers.sort_by(by_pace_descending);
}

/// Return the fastest hiker, preferring the earliest one on ties.
#[must_use]
pub fn fastest(hikers: &[Hiker]) -> Option<&Hiker> {
    hikers.iter().reduce(|best, candidate| {
        if candidate.pace() > best.pace() {
            candidate
        } else {
            best
        }
    })
}

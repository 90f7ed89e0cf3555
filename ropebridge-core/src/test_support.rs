//! Test-only builders for hikers and bridges.
#![expect(
    clippy::expect_used,
    reason = "builders are only used with literal fixtures in tests"
)]

use crate::{Bridge, BridgeId, Hiker};

/// Build a hiker, panicking on an invalid pace.
#[must_use]
pub fn hiker(name: &str, pace: f64) -> Hiker {
    Hiker::new(name, pace).expect("fixture pace should be positive")
}

/// Build a bridge from `(name, pace)` pairs, panicking on invalid input.
#[must_use]
pub fn bridge(id: u32, length: f64, hikers: &[(&str, f64)]) -> Bridge {
    let roster = hikers
        .iter()
        .map(|&(name, pace)| hiker(name, pace))
        .collect();
    Bridge::new(BridgeId::new(id), length, roster).expect("fixture length should be positive")
}

//! Facade crate for the rope-bridge crossing planner.
//!
//! This crate re-exports the domain types and the crossing simulator from
//! `ropebridge-core`. The `ropebridge` binary lives in `ropebridge-cli`.

#![forbid(unsafe_code)]

pub use ropebridge_core::{
    Bridge, BridgeCrossing, BridgeError, BridgeId, CrossingError, CrossingReport, Hiker,
    HikerError, Pool, Trip, cross_bridge, pace, simulate,
};

#[cfg(feature = "test-support")]
pub use ropebridge_core::test_support;

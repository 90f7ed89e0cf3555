//! Core domain types and crossing rules for the rope-bridge planner.
//!
//! Hikers arrive in groups at a sequence of rope bridges. Each bridge carries
//! at most two hikers at once, a pair walks at the slower hiker's pace, and
//! the single torch must be walked back before the next pair can cross. The
//! [`crossing`] module decides who crosses with whom and accumulates the
//! elapsed time; [`pace`] provides the ordering it relies on.
//!
//! Constructors validate their input so the simulator never sees a
//! non-positive pace or length.

#![forbid(unsafe_code)]

mod bridge;
pub mod crossing;
mod hiker;
pub mod pace;
mod report;
#[cfg(feature = "test-support")]
pub mod test_support;

pub use bridge::{Bridge, BridgeError, BridgeId};
pub use crossing::{BridgeCrossing, CrossingError, Pool, Trip, cross_bridge, simulate};
pub use hiker::{Hiker, HikerError};
pub use report::CrossingReport;

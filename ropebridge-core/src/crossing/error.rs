use thiserror::Error;

use crate::BridgeId;

/// Errors from [`crate::crossing::simulate`].
///
/// Every check runs before the first bridge is crossed, so an error means no
/// durations were computed at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CrossingError {
    /// Two bridges share an identifier and would overwrite each other's
    /// result slot.
    #[error("bridge id {id} appears more than once")]
    DuplicateBridgeId {
        /// Repeated identifier.
        id: BridgeId,
    },
    /// Identifiers must be dense and zero-based: every id lies in
    /// `0..count`.
    #[error("bridge id {id} is out of range for {count} bridges (expected 0..{count})")]
    BridgeIdOutOfRange {
        /// Offending identifier.
        id: BridgeId,
        /// Number of bridges supplied.
        count: usize,
    },
}

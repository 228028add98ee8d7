// error.rs - Recoverable error type for the case engines.
//
// Only resource exhaustion is reportable. Safety-layer contract violations
// abort through `safe::kms` and never become a value.

use std::fmt;

use tracing::warn;

/// Error type for case mapping and sort-key generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseError {
    /// The output buffer (`units` units of `encoding`, bytes for sort keys)
    /// exceeds the allocatable ceiling or the allocator refused it.
    CapacityOverflow { units: usize, encoding: &'static str },
}

impl CaseError {
    pub(crate) fn overflow(units: usize, encoding: &'static str) -> Self {
        warn!(units, encoding, "output exceeds allocation ceiling");
        CaseError::CapacityOverflow { units, encoding }
    }

    /// Requested size in output units.
    pub fn units(&self) -> usize {
        match self {
            CaseError::CapacityOverflow { units, .. } => *units,
        }
    }
}

impl fmt::Display for CaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseError::CapacityOverflow { units, encoding } => write!(
                f,
                "output of {} {} code units exceeds the allocation limit",
                units, encoding
            ),
        }
    }
}

impl std::error::Error for CaseError {}

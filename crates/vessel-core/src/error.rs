//! Error types for storage allocation and container configuration.

use std::error::Error;
use std::fmt;

/// Errors raised while acquiring raw storage.
///
/// Both variants are reported before any live element is touched, so a
/// container that sees one of these is exactly as it was before the call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageError {
    /// The byte size of the request does not fit in a valid layout
    /// (exceeds `isize::MAX` or overflows `usize`).
    CapacityOverflow {
        /// Number of elements requested.
        requested: usize,
        /// Size of one element in bytes.
        elem_size: usize,
    },
    /// The global allocator could not satisfy the request.
    AllocFailed {
        /// Size of the failed allocation in bytes.
        bytes: usize,
        /// Alignment of the failed allocation in bytes.
        align: usize,
    },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow {
                requested,
                elem_size,
            } => {
                write!(
                    f,
                    "capacity overflow: {requested} elements of {elem_size} bytes"
                )
            }
            Self::AllocFailed { bytes, align } => {
                write!(
                    f,
                    "allocation failed: {bytes} bytes with alignment {align}"
                )
            }
        }
    }
}

impl Error for StorageError {}

/// Errors detected by [`GrowthPolicy::validate()`](crate::GrowthPolicy::validate).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Growth factor below 2 would not grow a full container.
    InvalidGrowthFactor {
        /// The rejected factor.
        factor: usize,
    },
    /// A minimum capacity of zero would leave an empty container stuck
    /// at capacity zero.
    ZeroMinCapacity,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGrowthFactor { factor } => {
                write!(f, "growth factor must be at least 2, got {factor}")
            }
            Self::ZeroMinCapacity => write!(f, "minimum capacity must be non-zero"),
        }
    }
}

impl Error for ConfigError {}

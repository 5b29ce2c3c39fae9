//! Vocabulary for how live elements reach a fresh block on reallocation.

use std::fmt;

/// How a reallocation moves live elements into a new block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransferKind {
    /// Bitwise relocation. Cannot fail; the old slots become uninitialized.
    Move,
    /// Copy construction. May panic; the old block stays intact until the
    /// new one is fully populated, then the old elements are destroyed.
    Copy,
}

impl TransferKind {
    /// Whether a reallocation using this kind can fail part-way.
    pub const fn is_fallible(self) -> bool {
        matches!(self, Self::Copy)
    }
}

impl fmt::Display for TransferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Move => write!(f, "move"),
            Self::Copy => write!(f, "copy"),
        }
    }
}

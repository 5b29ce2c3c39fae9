//! Vessel: a growable contiguous container with explicit control over
//! storage, growth, and panic safety.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Vessel sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use vessel::prelude::*;
//!
//! let mut v: Vector<String> = Vector::new();
//! v.push("b".to_string());
//! v.insert(0, "a".to_string());
//! v.emplace_back(|| "c".to_string());
//! assert_eq!(v, ["a", "b", "c"]);
//!
//! // Growth doubles from one slot.
//! assert_eq!(v.capacity(), 4);
//!
//! // Reallocation can go through `Clone` instead of a bitwise move.
//! let mut cloned: Vector<String, CloneRelocate> = Vector::new();
//! cloned.extend(v.iter().cloned());
//! assert_eq!(cloned.transfer_kind(), TransferKind::Copy);
//!
//! // Allocation failure can be observed instead of aborting.
//! let err = v.try_reserve(usize::MAX).unwrap_err();
//! assert!(matches!(err, StorageError::CapacityOverflow { .. }));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `vessel-core` | errors, `GrowthPolicy`, `TransferKind` |
//! | [`buf`] | `vessel-buf` | `RawStorage`, transfer policies, `Vector` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Errors, growth configuration, and transfer vocabulary (`vessel-core`).
pub use vessel_core as types;

/// Raw storage, transfer policies, and the container (`vessel-buf`).
pub use vessel_buf as buf;

/// Common imports for typical Vessel usage.
///
/// ```rust
/// use vessel::prelude::*;
///
/// let v: Vector<u8> = Vector::with_len(3);
/// assert_eq!(v, [0, 0, 0]);
/// ```
pub mod prelude {
    pub use vessel_buf::{CloneRelocate, RawStorage, Relocate, Transfer, Vector};
    pub use vessel_core::{ConfigError, GrowthPolicy, StorageError, TransferKind};
}

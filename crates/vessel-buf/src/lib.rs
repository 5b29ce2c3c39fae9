//! Raw storage and the growable contiguous container.
//!
//! This is the only crate in the workspace that may contain `unsafe`
//! code. Element construction into raw memory is confined to the private
//! `slots` module; everything else talks to it through a handful of
//! primitives so the live/uninitialized bookkeeping stays checkable in one
//! place.
//!
//! # Architecture
//!
//! ```text
//! Vector<T, P>  (live count, growth policy, transfer policy P)
//! └── RawStorage<T>  (uninitialized block, capacity; never drops elements)
//!     └── slots  (construct_at / destroy_n / InitGuard, crate-private)
//! ```
//!
//! # Panic-safety tiers
//!
//! - **Reallocating paths** (`reserve`, growing `push`/`emplace`): strong.
//!   The new block is allocated and fully populated before the old one is
//!   touched, so a panic leaves the container as it was.
//! - **In-place paths** (`resize`, in-place `emplace`, `erase`, the
//!   in-place branch of `clone_from`): basic. The container stays valid and
//!   droppable but may not match its pre-call state.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod raw;
mod slots;
pub mod transfer;
pub mod vector;

// Public re-exports for the primary API surface.
pub use raw::RawStorage;
pub use transfer::{CloneRelocate, Relocate, Transfer};
pub use vector::Vector;
pub use vessel_core::{ConfigError, GrowthPolicy, StorageError, TransferKind};

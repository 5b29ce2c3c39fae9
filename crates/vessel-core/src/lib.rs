//! Core types for the Vessel container workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by the storage and container layers: error types,
//! the growth configuration, and the transfer-kind tag reported by
//! reallocation policies.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod transfer;

pub use config::GrowthPolicy;
pub use error::{ConfigError, StorageError};
pub use transfer::TransferKind;

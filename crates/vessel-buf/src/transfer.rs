//! Policies for moving live elements into a fresh block on reallocation.
//!
//! A [`Vector`](crate::Vector) is parameterised by one of these policies.
//! The choice decides both the cost of a reallocation and what happens to
//! the old block when an element operation panics part-way through.
//!
//! - [`Relocate`] (the default) moves values bitwise. Rust moves cannot
//!   fail, so this path is both the fast one and the strongly safe one.
//! - [`CloneRelocate`] builds the new block by cloning. The old block is
//!   left intact until every clone has succeeded, and only then are the
//!   originals dropped. Use it for element types whose values must not be
//!   relocated bitwise behind their back.

use std::ptr;

use vessel_core::TransferKind;

use crate::slots;

/// Moves a run of live elements into an uninitialized run.
///
/// Implementors are zero-sized markers; the container never instantiates
/// them.
pub trait Transfer<T> {
    /// How this policy transfers elements.
    const KIND: TransferKind;

    /// Populate `[dst, dst + n)` from the live run `[src, src + n)`.
    ///
    /// For [`TransferKind::Move`] the source run is uninitialized on
    /// return. For [`TransferKind::Copy`] the source run is still live and
    /// the caller must drop it.
    ///
    /// If this panics, `dst` holds no live values and `src` is unchanged.
    ///
    /// # Safety
    ///
    /// `src` must be `n` live values, `dst` `n` uninitialized writable
    /// slots, and the two runs must not overlap.
    unsafe fn transfer(src: *mut T, dst: *mut T, n: usize);
}

/// Bitwise relocation. Infallible.
#[derive(Clone, Copy, Debug)]
pub enum Relocate {}

impl<T> Transfer<T> for Relocate {
    const KIND: TransferKind = TransferKind::Move;

    #[inline]
    unsafe fn transfer(src: *mut T, dst: *mut T, n: usize) {
        // SAFETY: forwarded from the caller; the runs do not overlap.
        unsafe { ptr::copy_nonoverlapping(src, dst, n) };
    }
}

/// Relocation through [`Clone`]. May panic; never disturbs the source.
#[derive(Clone, Copy, Debug)]
pub enum CloneRelocate {}

impl<T: Clone> Transfer<T> for CloneRelocate {
    const KIND: TransferKind = TransferKind::Copy;

    #[inline]
    unsafe fn transfer(src: *mut T, dst: *mut T, n: usize) {
        // SAFETY: forwarded from the caller.
        unsafe { slots::clone_n(src.cast_const(), n, dst) };
    }
}

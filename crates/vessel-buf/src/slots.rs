//! Placement primitives for building and destroying values in raw slots.
//!
//! Crate-private. Every function here works on raw pointers into a
//! [`RawStorage`](crate::RawStorage) block and trusts the caller about
//! which slots are live. The guard types make sure a panic part-way
//! through a batch never leaves a half-built run behind.

use std::mem;
use std::ptr;

/// Write `value` into the uninitialized slot at `slot`.
///
/// # Safety
///
/// `slot` must be valid for writes, aligned, and not hold a live value
/// (a live value there would be leaked).
#[inline]
pub(crate) unsafe fn construct_at<T>(slot: *mut T, value: T) {
    // SAFETY: forwarded from the caller.
    unsafe { ptr::write(slot, value) };
}

/// Run the destructors of `n` live values starting at `first`.
///
/// # Safety
///
/// `[first, first + n)` must all be live. They are uninitialized afterwards.
#[inline]
pub(crate) unsafe fn destroy_n<T>(first: *mut T, n: usize) {
    if n == 0 || !mem::needs_drop::<T>() {
        return;
    }
    // SAFETY: the caller guarantees the run is live.
    unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(first, n)) };
}

/// Tracks a contiguous run of freshly built slots.
///
/// If dropped (normally during unwinding) the run is destroyed. Call
/// [`finish`](Self::finish) once the run has been handed over to its real
/// owner.
pub(crate) struct InitGuard<T> {
    start: *mut T,
    len: usize,
}

impl<T> InitGuard<T> {
    /// Start an empty run at `start`.
    pub(crate) fn new(start: *mut T) -> Self {
        Self { start, len: 0 }
    }

    /// Build the next slot of the run.
    ///
    /// # Safety
    ///
    /// `start + len` must be a valid, uninitialized slot.
    #[inline]
    pub(crate) unsafe fn push(&mut self, value: T) {
        // SAFETY: forwarded from the caller.
        unsafe { construct_at(self.start.add(self.len), value) };
        self.len += 1;
    }

    /// Extend the tracked run backwards by `n` slots that were built
    /// directly in front of it.
    ///
    /// # Safety
    ///
    /// `[start - n, start)` must now be live and belong to the same block.
    pub(crate) unsafe fn extend_front(&mut self, n: usize) {
        // SAFETY: forwarded from the caller.
        self.start = unsafe { self.start.sub(n) };
        self.len += n;
    }

    /// Hand the run over; it will no longer be destroyed by the guard.
    pub(crate) fn finish(self) -> usize {
        let len = self.len;
        mem::forget(self);
        len
    }
}

impl<T> Drop for InitGuard<T> {
    fn drop(&mut self) {
        // SAFETY: the guard only ever counts slots it saw constructed.
        unsafe { destroy_n(self.start, self.len) };
    }
}

/// Clone `n` values from `src` into the uninitialized run at `dst`.
///
/// If a clone panics, the clones already made are dropped before the panic
/// continues and `dst` is left fully uninitialized. `src` is never touched
/// beyond shared reads.
///
/// # Safety
///
/// `[src, src + n)` must be live, `[dst, dst + n)` uninitialized and
/// writable, and the two runs must not overlap.
pub(crate) unsafe fn clone_n<T: Clone>(src: *const T, n: usize, dst: *mut T) {
    let mut guard = InitGuard::new(dst);
    for i in 0..n {
        // SAFETY: i < n, src run is live; dst slot i is uninitialized.
        unsafe { guard.push((*src.add(i)).clone()) };
    }
    guard.finish();
}

/// Build `n` values with `f` into the uninitialized run at `dst`.
///
/// Same panic behavior as [`clone_n`].
///
/// # Safety
///
/// `[dst, dst + n)` must be uninitialized and writable.
pub(crate) unsafe fn fill_with<T, F>(dst: *mut T, n: usize, mut f: F)
where
    F: FnMut() -> T,
{
    let mut guard = InitGuard::new(dst);
    for _ in 0..n {
        // SAFETY: the guard never exceeds n slots.
        unsafe { guard.push(f()) };
    }
    guard.finish();
}

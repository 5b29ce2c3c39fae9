//! Owner of one uninitialized memory block.
//!
//! [`RawStorage`] knows how many elements its block can hold and nothing
//! else: it never constructs, reads, or drops an element. Whoever puts
//! values into the slots is responsible for dropping them before the
//! storage goes away.

use std::alloc::{self, Layout};
use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use vessel_core::StorageError;

/// An owned, uninitialized block sized for `capacity` values of `T`.
///
/// Zero capacity and zero-sized `T` never touch the allocator; the pointer
/// is dangling but well-aligned in that case. The type is deliberately not
/// `Clone`: the block can only change hands through a move,
/// [`swap`](Self::swap), or [`take`](Self::take).
pub struct RawStorage<T> {
    ptr: NonNull<T>,
    capacity: usize,
    _owns: PhantomData<T>,
}

// SAFETY: RawStorage uniquely owns its block, like Box<[MaybeUninit<T>]>.
unsafe impl<T: Send> Send for RawStorage<T> {}
// SAFETY: shared access only hands out raw pointers; see Send above.
unsafe impl<T: Sync> Sync for RawStorage<T> {}

impl<T> RawStorage<T> {
    /// The empty state: no block, capacity zero.
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            _owns: PhantomData,
        }
    }

    /// Allocate a block for `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if the byte size overflows. Allocator failure is treated as
    /// fatal and routed to [`std::alloc::handle_alloc_error`].
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(storage) => storage,
            Err(StorageError::AllocFailed { bytes, align }) => {
                // The layout was valid when try_with_capacity built it.
                match Layout::from_size_align(bytes, align) {
                    Ok(layout) => alloc::handle_alloc_error(layout),
                    Err(_) => capacity_overflow(),
                }
            }
            Err(StorageError::CapacityOverflow { .. }) => capacity_overflow(),
        }
    }

    /// Allocate a block for `capacity` elements, reporting failure.
    ///
    /// `capacity == 0` yields the empty state without allocating.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, StorageError> {
        let layout = Self::layout_for(capacity)?;
        if layout.size() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                capacity,
                _owns: PhantomData,
            });
        }

        // SAFETY: layout has non-zero size.
        let raw = unsafe { alloc::alloc(layout) };
        let ptr = NonNull::new(raw.cast::<T>()).ok_or(StorageError::AllocFailed {
            bytes: layout.size(),
            align: layout.align(),
        })?;

        Ok(Self {
            ptr,
            capacity,
            _owns: PhantomData,
        })
    }

    /// Number of elements the block can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether a block is currently held from the allocator.
    ///
    /// `false` for the empty state and for zero-sized `T`.
    pub fn is_allocated(&self) -> bool {
        self.capacity != 0 && mem::size_of::<T>() != 0
    }

    /// Address of the first slot.
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Mutable address of the first slot.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Address of slot `offset`.
    ///
    /// `offset == capacity` is allowed and yields the one-past-the-end
    /// address.
    ///
    /// # Panics
    ///
    /// Panics if `offset > capacity`.
    #[track_caller]
    pub fn slot(&self, offset: usize) -> *const T {
        assert!(
            offset <= self.capacity,
            "slot offset {offset} past capacity {}",
            self.capacity
        );
        // SAFETY: offset <= capacity keeps the result inside the block or
        // one past its end.
        unsafe { self.ptr.as_ptr().add(offset) }
    }

    /// Mutable address of slot `offset`. See [`slot`](Self::slot).
    #[track_caller]
    pub fn slot_mut(&mut self, offset: usize) -> *mut T {
        assert!(
            offset <= self.capacity,
            "slot offset {offset} past capacity {}",
            self.capacity
        );
        // SAFETY: as in `slot`.
        unsafe { self.ptr.as_ptr().add(offset) }
    }

    /// Exchange blocks and capacities with `other`. No element work.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Move the block out, leaving `self` in the empty state.
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::new())
    }

    fn layout_for(capacity: usize) -> Result<Layout, StorageError> {
        Layout::array::<T>(capacity).map_err(|_| StorageError::CapacityOverflow {
            requested: capacity,
            elem_size: mem::size_of::<T>(),
        })
    }
}

impl<T> Default for RawStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawStorage<T> {
    fn drop(&mut self) {
        if !self.is_allocated() {
            return;
        }
        // The layout was validated when the block was allocated.
        if let Ok(layout) = Self::layout_for(self.capacity) {
            // SAFETY: ptr came from alloc::alloc with exactly this layout.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
        }
    }
}

impl<T> fmt::Debug for RawStorage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawStorage")
            .field("ptr", &self.ptr)
            .field("capacity", &self.capacity)
            .finish()
    }
}

#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}

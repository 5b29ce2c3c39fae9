//! The growable contiguous container.
//!
//! A [`Vector`] owns one [`RawStorage`] block and a live count `len`.
//! Slots `[0, len)` always hold live values and slots `[len, capacity)` are
//! always uninitialized. Every method below preserves that split, including
//! when an element's `Clone`, `Default`, or constructor closure panics.

use std::borrow::{Borrow, BorrowMut};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem::ManuallyDrop;
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use vessel_core::{ConfigError, GrowthPolicy, StorageError, TransferKind};

use crate::raw::{capacity_overflow, RawStorage};
use crate::slots::{self, InitGuard};
use crate::transfer::{Relocate, Transfer};

/// A growable, contiguous sequence of `T`.
///
/// `P` picks how live elements reach a new block when the vector
/// reallocates; see [`crate::transfer`]. The default, [`Relocate`], moves
/// them bitwise.
///
/// Element access, iteration, and the rest of the read-only slice API come
/// through `Deref<Target = [T]>`. References obtained that way are tied to
/// a borrow of the vector, so the borrow checker rules out using them
/// across anything that reallocates or shifts elements.
///
/// # Examples
///
/// ```rust
/// use vessel_buf::Vector;
///
/// let mut v: Vector<i32> = Vector::new();
/// v.push(1);
/// v.push(3);
/// v.insert(1, 2);
/// assert_eq!(v, [1, 2, 3]);
/// assert_eq!(v.capacity(), 4);
/// ```
pub struct Vector<T, P = Relocate> {
    buf: RawStorage<T>,
    len: usize,
    growth: GrowthPolicy,
    _policy: PhantomData<fn() -> P>,
}

impl<T, P> Vector<T, P> {
    /// An empty vector with capacity zero and doubling growth.
    pub const fn new() -> Self {
        Self {
            buf: RawStorage::new(),
            len: 0,
            growth: GrowthPolicy::DOUBLING,
            _policy: PhantomData,
        }
    }

    /// An empty vector that grows according to `growth`.
    pub fn with_growth(growth: GrowthPolicy) -> Result<Self, ConfigError> {
        growth.validate()?;
        Ok(Self {
            buf: RawStorage::new(),
            len: 0,
            growth,
            _policy: PhantomData,
        })
    }

    /// An empty vector with room for exactly `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_storage(RawStorage::with_capacity(capacity))
    }

    /// Like [`with_capacity`](Self::with_capacity), reporting allocation
    /// failure instead of aborting.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, StorageError> {
        RawStorage::try_with_capacity(capacity).map(Self::from_storage)
    }

    /// A vector of `len` default-constructed elements, capacity exactly `len`.
    ///
    /// If a `T::default()` call panics, the elements built so far are
    /// dropped and the storage released before the panic continues.
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut v = Self::with_capacity(len);
        // SAFETY: the fresh block has `len` uninitialized slots.
        unsafe { slots::fill_with(v.buf.as_mut_ptr(), len, T::default) };
        v.len = len;
        v
    }

    fn from_storage(buf: RawStorage<T>) -> Self {
        Self {
            buf,
            len: 0,
            growth: GrowthPolicy::DOUBLING,
            _policy: PhantomData,
        }
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no live elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of elements the current block can hold.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// The growth policy used when an append finds the vector full.
    pub fn growth(&self) -> GrowthPolicy {
        self.growth
    }

    /// Address of the first slot. Dangling (but aligned) when nothing is
    /// allocated.
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Mutable address of the first slot.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }

    /// The live elements.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: [0, len) is live; the pointer is non-null and aligned
        // even when nothing is allocated.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    /// The live elements, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`, and we hold `&mut self`.
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len) }
    }

    /// Drop every element from index `len` onwards. No-op if `len` is not
    /// below the current length. Capacity is unchanged.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        let tail = self.len - len;
        // Shrink first so a panicking destructor cannot cause a double drop.
        self.len = len;
        // SAFETY: [len, len + tail) was live and is no longer counted.
        unsafe { slots::destroy_n(self.buf.slot_mut(len), tail) };
    }

    /// Drop every element. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Remove and return the last element, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: slot `len` was live and is no longer counted.
        Some(unsafe { ptr::read(self.buf.slot(self.len)) })
    }

    /// Drop the last element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[track_caller]
    pub fn pop_back(&mut self) {
        match self.pop() {
            Some(last) => drop(last),
            None => panic!("pop_back on an empty vector"),
        }
    }

    /// Remove and return the element at `index`, shifting everything after
    /// it one slot left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        let len = self.len;
        assert!(
            index < len,
            "removal index (is {index}) should be < len (is {len})"
        );
        // SAFETY: index < len, so the read is of a live slot and the shifted
        // run [index + 1, len) is live. After the shift the last slot holds
        // a stale bitwise duplicate that is no longer counted.
        unsafe {
            let hole = self.buf.slot_mut(index);
            let removed = ptr::read(hole);
            ptr::copy(hole.add(1), hole, len - index - 1);
            self.len = len - 1;
            removed
        }
    }

    /// Drop the element at `index`, shifting everything after it one slot
    /// left. Relative order of the remaining elements is preserved.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[track_caller]
    pub fn erase(&mut self, index: usize) {
        drop(self.remove(index));
    }

    /// Exchange contents, capacity, and growth policy with `other`. O(1).
    pub fn swap_with(&mut self, other: &mut Self) {
        self.buf.swap(&mut other.buf);
        std::mem::swap(&mut self.len, &mut other.len);
        std::mem::swap(&mut self.growth, &mut other.growth);
    }
}

impl<T, P: Transfer<T>> Vector<T, P> {
    /// How this vector moves elements when it reallocates.
    pub fn transfer_kind(&self) -> TransferKind {
        P::KIND
    }

    /// Ensure room for `new_capacity` elements in total.
    ///
    /// No-op if `new_capacity <= capacity`; capacity never shrinks.
    /// Otherwise a block of exactly `new_capacity` is allocated before any
    /// element is touched, the live elements are transferred into it, and
    /// the old block is released.
    ///
    /// Strong guarantee: if allocation fails or a transfer panics, the
    /// vector is unchanged.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow; aborts via
    /// [`std::alloc::handle_alloc_error`] if the allocator fails.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity <= self.capacity() {
            return;
        }
        let fresh = RawStorage::with_capacity(new_capacity);
        self.relocate_into(fresh);
    }

    /// Like [`reserve`](Self::reserve), reporting allocation failure.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), StorageError> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }
        let fresh = RawStorage::try_with_capacity(new_capacity)?;
        self.relocate_into(fresh);
        Ok(())
    }

    /// Append `value`, growing by the growth policy if full.
    pub fn push(&mut self, value: T) {
        self.emplace_back(|| value);
    }

    /// Build an element with `make` directly at the end and return it.
    ///
    /// When the vector is full the new element is built at its final slot
    /// in the new block before the old elements are transferred. If `make`
    /// or the transfer panics, the new block is torn down and the vector is
    /// unchanged.
    pub fn emplace_back<F>(&mut self, make: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        if self.len == self.capacity() {
            self.grow_with(self.len, make);
        } else {
            let value = make();
            // SAFETY: len < capacity, so slot `len` is uninitialized.
            unsafe { slots::construct_at(self.buf.slot_mut(self.len), value) };
            self.len += 1;
        }
        // SAFETY: the last slot was just made live.
        unsafe { &mut *self.buf.slot_mut(self.len - 1) }
    }

    /// Build an element with `make` at `index`, shifting `[index, len)`
    /// one slot right, and return it.
    ///
    /// `index == len` is the same as [`emplace_back`](Self::emplace_back).
    ///
    /// If the vector is full, the new element is built in the new block at
    /// its final slot, then the prefix `[0, index)` and the suffix
    /// `[index, len)` are transferred around it. A panic anywhere on that
    /// path destroys what was already built in the new block and leaves the
    /// old one untouched (strong guarantee). Otherwise the value is built
    /// first and then shifted in place (basic guarantee).
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    #[track_caller]
    pub fn emplace<F>(&mut self, index: usize, make: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        let len = self.len;
        assert!(
            index <= len,
            "insertion index (is {index}) should be <= len (is {len})"
        );
        if index == len {
            return self.emplace_back(make);
        }

        if len == self.capacity() {
            self.grow_with(index, make);
        } else {
            let value = make();
            // SAFETY: index < len < capacity; [index, len) is live and slot
            // `len` is uninitialized, so the shifted run stays in bounds.
            // The copy leaves a stale duplicate at `index`, overwritten
            // without being dropped.
            unsafe {
                let at = self.buf.slot_mut(index);
                ptr::copy(at, at.add(1), len - index);
                slots::construct_at(at, value);
            }
            self.len = len + 1;
        }
        // SAFETY: slot `index` is live.
        unsafe { &mut *self.buf.slot_mut(index) }
    }

    /// Insert `value` at `index`. See [`emplace`](Self::emplace).
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        self.emplace(index, || value)
    }

    /// Resize to `new_len`, filling new slots with `fill`.
    ///
    /// Shrinking drops the trailing elements. Growing reserves exactly
    /// `new_len` if needed, then builds `new_len - len` elements at the end.
    /// If `fill` panics, the elements built by this call are dropped and
    /// `len` is unchanged, but the capacity may already have grown (basic
    /// guarantee).
    pub fn resize_with<F>(&mut self, new_len: usize, fill: F)
    where
        F: FnMut() -> T,
    {
        let len = self.len;
        if new_len <= len {
            self.truncate(new_len);
            return;
        }
        self.reserve(new_len);
        // SAFETY: capacity >= new_len and [len, new_len) is uninitialized.
        unsafe { slots::fill_with(self.buf.slot_mut(len), new_len - len, fill) };
        self.len = new_len;
    }

    /// Resize to `new_len`, filling new slots with `T::default()`.
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default);
    }

    /// Reallocate to the next capacity and build `make()` at `index`.
    fn grow_with<F>(&mut self, index: usize, make: F)
    where
        F: FnOnce() -> T,
    {
        let len = self.len;
        debug_assert!(index <= len && len == self.capacity());
        let new_capacity = match self.growth.next_capacity(self.capacity()) {
            Some(capacity) => capacity,
            None => capacity_overflow(),
        };
        let mut fresh = RawStorage::<T>::with_capacity(new_capacity);

        let src = self.buf.as_mut_ptr();
        let dst = fresh.as_mut_ptr();
        // SAFETY: the fresh block has new_capacity > len slots, all
        // uninitialized. The guard covers the contiguous run built so far:
        // first [index, index + 1), then [0, index + 1). If a transfer
        // panics it leaves its own destination empty and the guard tears
        // down the rest. Move transfers never panic, so the guard never
        // drops a value whose source was relocated.
        unsafe {
            let mut built = InitGuard::new(dst.add(index));
            built.push(make());
            P::transfer(src, dst, index);
            built.extend_front(index);
            P::transfer(src.add(index), dst.add(index + 1), len - index);
            built.finish();
        }

        self.len = len + 1;
        self.install(fresh, len);
    }

    /// Transfer every live element into `fresh` and adopt it.
    fn relocate_into(&mut self, mut fresh: RawStorage<T>) {
        debug_assert!(fresh.capacity() >= self.len);
        // SAFETY: [0, len) is live and fresh has at least len uninitialized
        // slots in a separate block.
        unsafe { P::transfer(self.buf.as_mut_ptr(), fresh.as_mut_ptr(), self.len) };
        self.install(fresh, self.len);
    }

    /// Swap in a fully populated block and retire the old one.
    ///
    /// `moved` is the number of elements that were transferred out of the
    /// old block.
    fn install(&mut self, mut block: RawStorage<T>, moved: usize) {
        self.buf.swap(&mut block);
        // `block` now holds the old storage.
        log::trace!(
            "vector reallocated: {} -> {} slots, {} transfer of {} elements",
            block.capacity(),
            self.capacity(),
            P::KIND,
            moved
        );
        if let TransferKind::Copy = P::KIND {
            // SAFETY: a copy transfer leaves the old run live; the old block
            // is released right after.
            unsafe { slots::destroy_n(block.as_mut_ptr(), moved) };
        }
    }
}

impl<T, P> Drop for Vector<T, P> {
    fn drop(&mut self) {
        // SAFETY: [0, len) is live. The storage releases the block after.
        unsafe { slots::destroy_n(self.buf.as_mut_ptr(), self.len) };
    }
}

impl<T: Clone, P> Clone for Vector<T, P> {
    /// Deep copy with capacity exactly `len`.
    ///
    /// If an element clone panics, the clones made so far are dropped and
    /// the new block is released.
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.len);
        copy.growth = self.growth;
        // SAFETY: our [0, len) is live; copy's block has len uninitialized
        // slots.
        unsafe { slots::clone_n(self.buf.as_ptr(), self.len, copy.buf.as_mut_ptr()) };
        copy.len = self.len;
        copy
    }

    /// Copy-assign from `rhs`.
    ///
    /// If `rhs` has more elements than our capacity, a full copy is built
    /// first and swapped in, so a panic leaves `self` untouched. Otherwise
    /// the common prefix is clone-assigned in place, then our extra tail is
    /// dropped or `rhs`'s extra tail is cloned into the slots right after
    /// the prefix. A panic on that path can leave a mix of old and new
    /// values.
    fn clone_from(&mut self, rhs: &Self) {
        if rhs.len > self.capacity() {
            let mut copy = rhs.clone();
            self.swap_with(&mut copy);
            return;
        }

        let common = self.len.min(rhs.len);
        for (dst, src) in self.as_mut_slice()[..common].iter_mut().zip(&rhs[..common]) {
            dst.clone_from(src);
        }

        if rhs.len <= self.len {
            self.truncate(rhs.len);
        } else {
            let start = self.len;
            let extra = rhs.len - start;
            // SAFETY: rhs.len <= capacity, so [start, rhs.len) is in bounds
            // and uninitialized; rhs's run of the same range is live.
            unsafe {
                slots::clone_n(rhs.buf.slot(start), extra, self.buf.slot_mut(start));
            }
            self.len = rhs.len;
        }
        self.growth = rhs.growth;
    }
}

impl<T, P> Default for Vector<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> Deref for Vector<T, P> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, P> DerefMut for Vector<T, P> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, P> AsRef<[T]> for Vector<T, P> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, P> AsMut<[T]> for Vector<T, P> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, P> Borrow<[T]> for Vector<T, P> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, P> BorrowMut<[T]> for Vector<T, P> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug, P> fmt::Debug for Vector<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, U, P, Q> PartialEq<Vector<U, Q>> for Vector<T, P>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, Q>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, P> Eq for Vector<T, P> {}

impl<T, U, P> PartialEq<[U]> for Vector<T, P>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U, P, const N: usize> PartialEq<[U; N]> for Vector<T, P>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Hash, P> Hash for Vector<T, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<'a, T, P> IntoIterator for &'a Vector<T, P> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, P> IntoIterator for &'a mut Vector<T, P> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, P: Transfer<T>> Extend<T> for Vector<T, P> {
    /// Appends one element at a time, so growth follows the growth policy.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T, P: Transfer<T>> FromIterator<T> for Vector<T, P> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}

impl<T: Clone, P> From<&[T]> for Vector<T, P> {
    fn from(values: &[T]) -> Self {
        let mut v = Self::with_capacity(values.len());
        // SAFETY: the fresh block has values.len() uninitialized slots.
        unsafe { slots::clone_n(values.as_ptr(), values.len(), v.buf.as_mut_ptr()) };
        v.len = values.len();
        v
    }
}

impl<T, P, const N: usize> From<[T; N]> for Vector<T, P> {
    fn from(values: [T; N]) -> Self {
        let values = ManuallyDrop::new(values);
        let mut v = Self::with_capacity(N);
        // SAFETY: ownership of the N values moves into the fresh block; the
        // array is wrapped in ManuallyDrop so they are not dropped twice.
        unsafe { ptr::copy_nonoverlapping(values.as_ptr(), v.buf.as_mut_ptr(), N) };
        v.len = N;
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transfer::CloneRelocate;

    #[test]
    fn new_vector_is_empty() {
        let v: Vector<u32> = Vector::new();
        assert!(v.is_empty());
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 0);
        assert_eq!(v.transfer_kind(), TransferKind::Move);
    }

    #[test]
    fn growth_doubles_from_one() {
        let mut v: Vector<u32> = Vector::new();
        let mut seen = Vec::new();
        for i in 0..9 {
            v.push(i);
            seen.push(v.capacity());
        }
        assert_eq!(seen, [1, 2, 4, 4, 8, 8, 8, 8, 16]);
    }

    #[test]
    fn custom_growth_policy_is_used() {
        let mut v: Vector<u32> = Vector::with_growth(GrowthPolicy::new(3, 4)).unwrap();
        v.push(0);
        assert_eq!(v.capacity(), 4);
        v.extend(1..5);
        assert_eq!(v.capacity(), 12);
    }

    #[test]
    fn invalid_growth_policy_is_rejected() {
        let result = Vector::<u32>::with_growth(GrowthPolicy::new(1, 1));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidGrowthFactor { factor: 1 })
        ));
    }

    #[test]
    fn with_len_default_constructs() {
        let v: Vector<String> = Vector::with_len(3);
        assert_eq!(v.len(), 3);
        assert_eq!(v.capacity(), 3);
        assert!(v.iter().all(String::is_empty));
    }

    #[test]
    fn reserve_smaller_is_noop() {
        let mut v: Vector<u32> = Vector::from([1, 2, 3]);
        v.reserve(8);
        let ptr = v.as_ptr();
        v.reserve(2);
        v.reserve(8);
        assert_eq!(v.capacity(), 8);
        assert_eq!(v.as_ptr(), ptr);
        assert_eq!(v, [1, 2, 3]);
    }

    #[test]
    fn reserve_allocates_exactly() {
        let mut v: Vector<String> = Vector::new();
        v.push("a".into());
        v.reserve(5);
        assert_eq!(v.capacity(), 5);
        assert_eq!(v, ["a"]);
    }

    #[test]
    fn try_reserve_reports_overflow() {
        let mut v: Vector<u64> = Vector::from([7]);
        let err = v.try_reserve(usize::MAX).unwrap_err();
        assert!(matches!(err, StorageError::CapacityOverflow { .. }));
        assert_eq!(v, [7]);
        assert_eq!(v.capacity(), 1);
    }

    #[test]
    fn emplace_preserves_order() {
        let mut v: Vector<i32> = Vector::from([1, 2, 3]);
        let slot = v.emplace(1, || 9);
        assert_eq!(*slot, 9);
        assert_eq!(v, [1, 9, 2, 3]);
    }

    #[test]
    fn emplace_in_place_without_reallocating() {
        let mut v: Vector<String> = Vector::with_capacity(4);
        v.push("a".into());
        v.push("c".into());
        let ptr = v.as_ptr();
        v.insert(1, "b".into());
        v.insert(0, "_".into());
        assert_eq!(v.as_ptr(), ptr);
        assert_eq!(v, ["_", "a", "b", "c"]);
    }

    #[test]
    fn emplace_at_end_delegates_to_emplace_back() {
        let mut v: Vector<i32> = Vector::from([1, 2]);
        v.emplace(2, || 3);
        assert_eq!(v, [1, 2, 3]);
        assert_eq!(v.capacity(), 4);
    }

    #[test]
    fn emplace_into_empty_vector() {
        let mut v: Vector<i32> = Vector::new();
        v.emplace(0, || 5);
        assert_eq!(v, [5]);
        assert_eq!(v.capacity(), 1);
    }

    #[test]
    #[should_panic(expected = "insertion index (is 3) should be <= len (is 2)")]
    fn emplace_past_end_panics() {
        let mut v: Vector<i32> = Vector::from([1, 2]);
        v.insert(3, 0);
    }

    #[test]
    fn erase_shifts_left() {
        let mut v: Vector<i32> = Vector::from([1, 2, 3]);
        v.erase(1);
        assert_eq!(v, [1, 3]);
        assert_eq!(v.len(), 2);
        assert_eq!(v.capacity(), 3);
    }

    #[test]
    fn remove_returns_element() {
        let mut v: Vector<String> = Vector::from(["a".to_string(), "b".to_string()]);
        assert_eq!(v.remove(0), "a");
        assert_eq!(v.remove(0), "b");
        assert!(v.is_empty());
    }

    #[test]
    #[should_panic(expected = "removal index (is 0) should be < len (is 0)")]
    fn erase_on_empty_panics() {
        let mut v: Vector<i32> = Vector::new();
        v.erase(0);
    }

    #[test]
    fn pop_and_pop_back() {
        let mut v: Vector<i32> = Vector::from([1, 2, 3]);
        assert_eq!(v.pop(), Some(3));
        v.pop_back();
        assert_eq!(v, [1]);
        v.pop_back();
        assert_eq!(v.pop(), None);
    }

    #[test]
    #[should_panic(expected = "pop_back on an empty vector")]
    fn pop_back_on_empty_panics() {
        let mut v: Vector<i32> = Vector::new();
        v.pop_back();
    }

    #[test]
    fn resize_grows_and_shrinks() {
        let mut v: Vector<i32> = Vector::from([4, 5]);
        v.resize(5);
        assert_eq!(v, [4, 5, 0, 0, 0]);
        assert_eq!(v.capacity(), 5);
        v.resize(1);
        assert_eq!(v, [4]);
        assert_eq!(v.capacity(), 5);
    }

    #[test]
    fn clone_is_independent() {
        let mut a: Vector<String> = Vector::from(["x".to_string(), "y".to_string()]);
        let b = a.clone();
        a.push("z".into());
        a[0].push('!');
        assert_eq!(b, ["x", "y"]);
        assert_eq!(b.capacity(), 2);
        assert_eq!(a, ["x!", "y", "z"]);
    }

    #[test]
    fn clone_from_larger_source_reallocates() {
        let mut a: Vector<i32> = Vector::from([1]);
        let b: Vector<i32> = Vector::from([7, 8, 9]);
        a.clone_from(&b);
        assert_eq!(a, [7, 8, 9]);
        assert_eq!(a.capacity(), 3);
    }

    #[test]
    fn clone_from_shorter_source_truncates() {
        let mut a: Vector<String> = Vector::from(["a", "b", "c"].map(String::from));
        let b: Vector<String> = Vector::from(["z"].map(String::from));
        a.clone_from(&b);
        assert_eq!(a, ["z"]);
        assert_eq!(a.capacity(), 3);
    }

    #[test]
    fn clone_from_longer_source_within_capacity_fills_directly_after_prefix() {
        let mut a: Vector<String> = Vector::with_capacity(8);
        a.extend(["a", "b"].map(String::from));
        let b: Vector<String> = Vector::from(["p", "q", "r", "s"].map(String::from));
        let ptr = a.as_ptr();
        a.clone_from(&b);
        assert_eq!(a.as_ptr(), ptr);
        assert_eq!(a, ["p", "q", "r", "s"]);
    }

    #[test]
    fn take_leaves_source_empty() {
        let mut a: Vector<i32> = Vector::from([1, 2, 3]);
        let b = std::mem::take(&mut a);
        assert_eq!(b, [1, 2, 3]);
        assert_eq!(a.len(), 0);
        assert_eq!(a.capacity(), 0);
    }

    #[test]
    fn swap_exchanges_everything() {
        let mut a: Vector<i32> = Vector::from([1, 2, 3]);
        let mut b: Vector<i32> = Vector::with_growth(GrowthPolicy::new(4, 2)).unwrap();
        a.swap_with(&mut b);
        assert!(a.is_empty());
        assert_eq!(a.growth(), GrowthPolicy::new(4, 2));
        assert_eq!(b, [1, 2, 3]);
        assert_eq!(b.growth(), GrowthPolicy::DOUBLING);
    }

    #[test]
    fn element_swap_reaches_the_slice() {
        let mut v: Vector<i32> = Vector::from([1, 2, 3]);
        v.swap(0, 2);
        assert_eq!(v, [3, 2, 1]);
    }

    #[test]
    fn clone_relocate_keeps_values_through_growth() {
        let mut v: Vector<String, CloneRelocate> = Vector::new();
        for i in 0..20 {
            v.push(i.to_string());
        }
        v.insert(0, "head".into());
        assert_eq!(v.transfer_kind(), TransferKind::Copy);
        assert_eq!(v.len(), 21);
        assert_eq!(v[0], "head");
        assert_eq!(v[20], "19");
    }

    #[test]
    fn zero_sized_elements() {
        let mut v: Vector<()> = Vector::new();
        for _ in 0..10 {
            v.push(());
        }
        v.insert(3, ());
        v.erase(0);
        assert_eq!(v.len(), 10);
    }

    #[test]
    fn iteration_is_restartable() {
        let mut v: Vector<i32> = (1..=4).collect();
        for x in &mut v {
            *x *= 10;
        }
        let first: Vec<i32> = v.iter().copied().collect();
        let second: Vec<i32> = (&v).into_iter().copied().collect();
        assert_eq!(first, second);
        assert_eq!(first, [10, 20, 30, 40]);
    }

    #[test]
    fn unchecked_access_within_len() {
        let v: Vector<i32> = Vector::from([3, 4]);
        // SAFETY: 1 < len.
        assert_eq!(unsafe { *v.get_unchecked(1) }, 4);
        assert_eq!(v.get(2), None);
    }

    #[test]
    fn debug_formats_as_list() {
        let v: Vector<i32> = Vector::from([1, 2]);
        assert_eq!(format!("{v:?}"), "[1, 2]");
    }
}

//! Low-level owned storage for [`DynamicArray`](crate::DynamicArray).
//!
//! This is the only module in the crate allowed to contain `unsafe` code.
//! [`RawStorage`] owns one heap buffer and tracks which prefix of it holds
//! initialised elements; everything it exposes to the rest of the crate is
//! safe and upholds these invariants:
//!
//! - `len <= capacity`.
//! - Slots `[0, len)` are initialised, slots `[len, capacity)` are not.
//! - A heap allocation exists iff `capacity > 0` and `T` is not zero-sized.
//!   Zero-sized types track capacity logically and never allocate.
//! - The allocation is released exactly once, on reallocation or drop.
//!
//! Every `unsafe` block carries a `// SAFETY:` comment.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem;
use std::ptr::{self, NonNull};
use std::slice;

use crate::error::ArrayError;

/// Exclusively owned buffer plus its initialised length.
pub(crate) struct RawStorage<T> {
    ptr: NonNull<T>,
    capacity: usize,
    len: usize,
    _owns: PhantomData<T>,
}

// SAFETY: `RawStorage<T>` uniquely owns its elements, exactly like `Vec<T>`.
unsafe impl<T: Send> Send for RawStorage<T> {}
// SAFETY: shared access only hands out `&T`.
unsafe impl<T: Sync> Sync for RawStorage<T> {}

impl<T> RawStorage<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    /// Empty storage with no allocation.
    pub(crate) const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            len: 0,
            _owns: PhantomData,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether a heap allocation currently backs this storage.
    pub(crate) fn is_allocated(&self) -> bool {
        self.capacity > 0 && !Self::IS_ZST
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        // SAFETY: `ptr` is non-null and aligned (dangling only when nothing is
        // read through it), and slots `[0, len)` are initialised.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as for `as_slice`; `&mut self` guarantees exclusivity.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// # Safety
    ///
    /// `index < self.len()`.
    pub(crate) unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        // SAFETY: the caller guarantees `index` addresses an initialised slot.
        unsafe { &*self.ptr.as_ptr().add(index) }
    }

    /// # Safety
    ///
    /// `index < self.len()`.
    pub(crate) unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        // SAFETY: the caller guarantees `index` addresses an initialised slot.
        unsafe { &mut *self.ptr.as_ptr().add(index) }
    }

    /// Move the live elements into a fresh buffer of exactly `new_capacity`
    /// slots and release the old one.
    ///
    /// # Panics
    ///
    /// Panics if `new_capacity < self.len()`.
    pub(crate) fn reallocate(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        assert!(
            new_capacity >= self.len,
            "reallocation to {new_capacity} slots would drop live elements (len {})",
            self.len
        );
        if new_capacity == self.capacity {
            return Ok(());
        }
        let new_ptr = Self::allocate(new_capacity)?;
        // SAFETY: both buffers hold at least `len` slots and come from
        // distinct allocations (or are dangling with `len == 0` / ZST).
        unsafe { ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), self.len) };
        self.release();
        self.ptr = new_ptr;
        self.capacity = new_capacity;
        Ok(())
    }

    /// Append `value` into spare capacity.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is full; callers grow first.
    pub(crate) fn push(&mut self, value: T) {
        assert!(self.len < self.capacity, "push into a full buffer");
        // SAFETY: slot `len` lies inside the allocation and is uninitialised.
        unsafe { self.ptr.as_ptr().add(self.len).write(value) };
        self.len += 1;
    }

    /// Move the last element out, if any.
    pub(crate) fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: slot `len` was initialised and is now outside the live
        // prefix, so it is read exactly once.
        Some(unsafe { self.ptr.as_ptr().add(self.len).read() })
    }

    /// Shift `[index, len)` one slot right and write `value` at `index`.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is full or `index > len`.
    pub(crate) fn insert(&mut self, index: usize, value: T) {
        assert!(self.len < self.capacity, "insert into a full buffer");
        assert!(index <= self.len, "insert position {index} past length {}", self.len);
        // SAFETY: `index <= len < capacity`, so both the source range
        // `[index, len)` and destination `[index + 1, len + 1)` are in bounds.
        // `ptr::copy` handles the overlap.
        unsafe {
            let slot = self.ptr.as_ptr().add(index);
            ptr::copy(slot, slot.add(1), self.len - index);
            slot.write(value);
        }
        self.len += 1;
    }

    /// Move the element at `index` out and shift the tail one slot left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub(crate) fn remove(&mut self, index: usize) -> T {
        assert!(index < self.len, "remove position {index} past length {}", self.len);
        // SAFETY: `index < len`, so the slot is initialised; it is read once
        // and then overwritten by the shifted tail `[index + 1, len)`.
        unsafe {
            let slot = self.ptr.as_ptr().add(index);
            let value = slot.read();
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            self.len -= 1;
            value
        }
    }

    /// Drop every element at or after `len`, keeping the buffer.
    pub(crate) fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        let tail = self.len - len;
        // Shrink first so a panicking destructor cannot cause a double drop.
        self.len = len;
        // SAFETY: `[len, len + tail)` was initialised and is no longer live.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.ptr.as_ptr().add(len),
                tail,
            ));
        }
    }

    /// Hand the buffer to a consuming iterator.
    pub(crate) fn into_raw_iter(self) -> RawIntoIter<T> {
        RawIntoIter::new(self)
    }

    fn allocate(capacity: usize) -> Result<NonNull<T>, ArrayError> {
        if capacity == 0 || Self::IS_ZST {
            return Ok(NonNull::dangling());
        }
        let layout = Layout::array::<T>(capacity).map_err(|_| ArrayError::CapacityOverflow {
            requested: capacity,
        })?;
        // SAFETY: `capacity > 0` and `T` is not zero-sized, so the layout has
        // a non-zero size.
        let raw = unsafe { alloc::alloc(layout) };
        match NonNull::new(raw.cast::<T>()) {
            Some(ptr) => Ok(ptr),
            None => alloc::handle_alloc_error(layout),
        }
    }

    /// Free the buffer without touching elements. Leaves the storage
    /// unallocated with capacity 0.
    fn release(&mut self) {
        if self.is_allocated() {
            if let Ok(layout) = Layout::array::<T>(self.capacity) {
                // SAFETY: `ptr` was returned by `alloc::alloc` with exactly this
                // layout and has not been freed since.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
            }
        }
        self.ptr = NonNull::dangling();
        self.capacity = 0;
    }
}

impl<T> Drop for RawStorage<T> {
    fn drop(&mut self) {
        self.truncate(0);
        self.release();
    }
}

/// Owning cursor over a buffer whose live range is `[head, tail)`.
///
/// The wrapped storage has its length set to zero, so dropping it only
/// frees memory; this type drops whatever was not yielded.
pub(crate) struct RawIntoIter<T> {
    storage: RawStorage<T>,
    head: usize,
    tail: usize,
}

impl<T> RawIntoIter<T> {
    fn new(mut storage: RawStorage<T>) -> Self {
        let tail = storage.len;
        storage.len = 0;
        Self {
            storage,
            head: 0,
            tail,
        }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.tail - self.head
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        // SAFETY: `[head, tail)` is initialised and not yet yielded.
        unsafe {
            slice::from_raw_parts(self.storage.ptr.as_ptr().add(self.head), self.remaining())
        }
    }

    pub(crate) fn next_front(&mut self) -> Option<T> {
        if self.head == self.tail {
            return None;
        }
        // SAFETY: `head < tail`, so the slot is live; advancing `head` ensures
        // it is read exactly once.
        let value = unsafe { self.storage.ptr.as_ptr().add(self.head).read() };
        self.head += 1;
        Some(value)
    }

    pub(crate) fn next_back(&mut self) -> Option<T> {
        if self.head == self.tail {
            return None;
        }
        self.tail -= 1;
        // SAFETY: the slot at the old `tail - 1` is live and leaves the range.
        Some(unsafe { self.storage.ptr.as_ptr().add(self.tail).read() })
    }
}

impl<T> Drop for RawIntoIter<T> {
    fn drop(&mut self) {
        let remaining = self.remaining();
        let head = self.head;
        self.head = self.tail;
        // SAFETY: `[head, head + remaining)` holds the unyielded elements.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.storage.ptr.as_ptr().add(head),
                remaining,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Counted(Rc<Cell<usize>>);

    impl Drop for Counted {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn filled(n: usize) -> RawStorage<usize> {
        let mut storage = RawStorage::new();
        storage.reallocate(n).unwrap();
        for i in 0..n {
            storage.push(i);
        }
        storage
    }

    #[test]
    fn new_storage_is_unallocated() {
        let storage: RawStorage<u64> = RawStorage::new();
        assert_eq!(storage.capacity(), 0);
        assert_eq!(storage.len(), 0);
        assert!(!storage.is_allocated());
        assert!(storage.as_slice().is_empty());
    }

    #[test]
    fn reallocate_preserves_elements() {
        let mut storage = filled(4);
        storage.reallocate(16).unwrap();
        assert_eq!(storage.capacity(), 16);
        assert_eq!(storage.as_slice(), &[0, 1, 2, 3]);
        storage.reallocate(4).unwrap();
        assert_eq!(storage.as_slice(), &[0, 1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "would drop live elements")]
    fn reallocate_below_len_panics() {
        let mut storage = filled(4);
        let _ = storage.reallocate(2);
    }

    #[test]
    fn insert_and_remove_shift_correctly() {
        let mut storage = filled(3);
        storage.reallocate(4).unwrap();
        storage.insert(1, 99);
        assert_eq!(storage.as_slice(), &[0, 99, 1, 2]);
        assert_eq!(storage.remove(0), 0);
        assert_eq!(storage.as_slice(), &[99, 1, 2]);
        assert_eq!(storage.remove(2), 2);
        assert_eq!(storage.as_slice(), &[99, 1]);
    }

    #[test]
    fn pop_on_empty_is_none() {
        let mut storage: RawStorage<u8> = RawStorage::new();
        assert_eq!(storage.pop(), None);
    }

    #[test]
    fn zero_sized_types_never_allocate() {
        let mut storage: RawStorage<()> = RawStorage::new();
        storage.reallocate(8).unwrap();
        assert_eq!(storage.capacity(), 8);
        assert!(!storage.is_allocated());
        storage.push(());
        storage.insert(0, ());
        assert_eq!(storage.len(), 2);
        assert_eq!(storage.pop(), Some(()));
    }

    #[test]
    fn overflowing_layout_is_reported() {
        let mut storage: RawStorage<u64> = RawStorage::new();
        let err = storage.reallocate(usize::MAX).unwrap_err();
        assert_eq!(
            err,
            ArrayError::CapacityOverflow {
                requested: usize::MAX
            }
        );
        assert_eq!(storage.capacity(), 0);
    }

    #[test]
    fn drop_releases_every_element_once() {
        let drops = Rc::new(Cell::new(0));
        {
            let mut storage = RawStorage::new();
            storage.reallocate(8).unwrap();
            for _ in 0..5 {
                storage.push(Counted(drops.clone()));
            }
            storage.truncate(3);
            assert_eq!(drops.get(), 2);
        }
        assert_eq!(drops.get(), 5);
    }

    #[test]
    fn into_iter_drops_unyielded_elements() {
        let drops = Rc::new(Cell::new(0));
        let mut storage = RawStorage::new();
        storage.reallocate(4).unwrap();
        for _ in 0..4 {
            storage.push(Counted(drops.clone()));
        }
        let mut iter = storage.into_raw_iter();
        drop(iter.next_front());
        drop(iter.next_back());
        assert_eq!(drops.get(), 2);
        assert_eq!(iter.remaining(), 2);
        drop(iter);
        assert_eq!(drops.get(), 4);
    }
}

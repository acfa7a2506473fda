//! The growable contiguous array.
//!
//! [`DynamicArray`] owns a single heap buffer and manages its capacity
//! explicitly through a [`CapacityPolicy`]: it grows geometrically when a
//! push or insert finds the buffer full, and steps capacity down after
//! removals that leave the buffer sparsely occupied.
//!
//! # Ownership
//!
//! - `Clone` duplicates live elements into a buffer with the *same
//!   capacity* as the source.
//! - [`take`](DynamicArray::take) moves the buffer out and leaves the source
//!   empty and unallocated; [`transfer_from`](DynamicArray::transfer_from) is
//!   the assignment form.
//! - Dropping frees the buffer once; a moved-from array holds no buffer.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::slice;

use crate::cursor::{Cursor, CursorMut};
use crate::error::{ArrayError, PolicyError};
use crate::into_iter::IntoIter;
use crate::policy::CapacityPolicy;
use crate::raw::RawStorage;

/// A resizable contiguous sequence of `T` with explicit capacity management.
///
/// # Examples
///
/// ```
/// use tessera_array::DynamicArray;
///
/// let mut arr = DynamicArray::new();
/// for i in 0..5 {
///     arr.push_back(i);
/// }
/// assert_eq!(arr.capacity(), 8);
///
/// assert_eq!(arr.erase(2), Ok(2));
/// assert_eq!(arr.as_slice(), &[0, 1, 3, 4]);
///
/// arr.pop_back().unwrap();
/// arr.pop_back().unwrap();
/// assert_eq!(arr.as_slice(), &[0, 1]);
/// assert_eq!(arr.capacity(), 4);
/// ```
pub struct DynamicArray<T> {
    storage: RawStorage<T>,
    policy: CapacityPolicy,
}

impl<T> DynamicArray<T> {
    /// Create an empty array with the default policy. Does not allocate.
    pub const fn new() -> Self {
        Self {
            storage: RawStorage::new(),
            policy: CapacityPolicy::DEFAULT,
        }
    }

    /// Create an empty array governed by `policy`.
    ///
    /// Returns `Err` if the policy fails [`CapacityPolicy::validate`].
    pub fn with_policy(policy: CapacityPolicy) -> Result<Self, PolicyError> {
        policy.validate()?;
        Ok(Self {
            storage: RawStorage::new(),
            policy,
        })
    }

    /// Create an empty array with room for exactly `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut array = Self::new();
        array.reserve(capacity);
        array
    }

    /// Number of live elements.
    #[inline]
    pub fn size(&self) -> usize {
        self.storage.len()
    }

    /// Alias for [`size`](Self::size).
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Whether the array holds no elements.
    #[inline]
    pub fn empty(&self) -> bool {
        self.storage.len() == 0
    }

    /// Alias for [`empty`](Self::empty).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.len() == 0
    }

    /// Whether a heap buffer currently backs the array.
    pub fn is_allocated(&self) -> bool {
        self.storage.is_allocated()
    }

    /// The capacity policy in effect.
    pub fn policy(&self) -> &CapacityPolicy {
        &self.policy
    }

    /// View the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.storage.as_slice()
    }

    /// View the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.storage.as_mut_slice()
    }

    /// Iterate over the live elements.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterate mutably over the live elements.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    // ── Element access ───────────────────────────────────────────

    /// Checked access.
    ///
    /// Returns `Err(ArrayError::IndexOutOfBounds)` if `index >= size()`.
    pub fn at(&self, index: usize) -> Result<&T, ArrayError> {
        let len = self.size();
        self.as_slice()
            .get(index)
            .ok_or(ArrayError::IndexOutOfBounds { index, len })
    }

    /// Checked mutable access.
    ///
    /// Returns `Err(ArrayError::IndexOutOfBounds)` if `index >= size()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        let len = self.size();
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(ArrayError::IndexOutOfBounds { index, len })
    }

    /// Unchecked access.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`size`](Self::size). Anything else is
    /// undefined behaviour.
    #[allow(unsafe_code)]
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: forwarded caller contract.
        unsafe { self.storage.get_unchecked(index) }
    }

    /// Unchecked mutable access.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`size`](Self::size).
    #[allow(unsafe_code)]
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: forwarded caller contract.
        unsafe { self.storage.get_unchecked_mut(index) }
    }

    /// First element, or `Err(ArrayError::Empty)`.
    pub fn front(&self) -> Result<&T, ArrayError> {
        self.as_slice()
            .first()
            .ok_or(ArrayError::Empty { operation: "front" })
    }

    /// Mutable first element, or `Err(ArrayError::Empty)`.
    pub fn front_mut(&mut self) -> Result<&mut T, ArrayError> {
        self.as_mut_slice()
            .first_mut()
            .ok_or(ArrayError::Empty { operation: "front" })
    }

    /// Last element, or `Err(ArrayError::Empty)`.
    pub fn back(&self) -> Result<&T, ArrayError> {
        self.as_slice()
            .last()
            .ok_or(ArrayError::Empty { operation: "back" })
    }

    /// Mutable last element, or `Err(ArrayError::Empty)`.
    pub fn back_mut(&mut self) -> Result<&mut T, ArrayError> {
        self.as_mut_slice()
            .last_mut()
            .ok_or(ArrayError::Empty { operation: "back" })
    }

    // ── End insertion / removal ──────────────────────────────────

    /// Append `value`, growing the buffer first if it is full.
    ///
    /// With the default policy a full buffer of capacity `c` grows to
    /// `max(1, 2c)`. Amortised O(1).
    ///
    /// # Panics
    ///
    /// Panics if the grown capacity overflows.
    pub fn push_back(&mut self, value: T) {
        self.grow_if_full();
        self.storage.push(value);
    }

    /// Remove and return the last element, then apply the shrink policy.
    ///
    /// Returns `Err(ArrayError::Empty)` on an empty array, leaving it
    /// untouched.
    pub fn pop_back(&mut self) -> Result<T, ArrayError> {
        let value = self.storage.pop().ok_or(ArrayError::Empty {
            operation: "pop_back",
        })?;
        self.shrink();
        Ok(value)
    }

    // ── Positional insertion / removal ───────────────────────────

    /// Insert `value` before position `index`, shifting later elements right.
    ///
    /// `index == size()` appends. Returns
    /// `Err(ArrayError::IndexOutOfBounds)` if `index > size()`; the check
    /// runs before any growth, so a rejected insert never reallocates.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        let len = self.size();
        if index > len {
            return Err(ArrayError::IndexOutOfBounds { index, len });
        }
        self.grow_if_full();
        self.storage.insert(index, value);
        Ok(())
    }

    /// Remove and return the element at `index`, shifting later elements
    /// left, then apply the shrink policy.
    ///
    /// Returns `Err(ArrayError::IndexOutOfBounds)` if `index >= size()`.
    pub fn erase(&mut self, index: usize) -> Result<T, ArrayError> {
        let len = self.size();
        if index >= len {
            return Err(ArrayError::IndexOutOfBounds { index, len });
        }
        let value = self.storage.remove(index);
        self.shrink();
        Ok(value)
    }

    /// Drop every element. Capacity is kept.
    pub fn clear(&mut self) {
        self.storage.truncate(0);
    }

    // ── Capacity control ─────────────────────────────────────────

    /// Ensure `capacity() >= minimum`, reallocating to exactly `minimum`
    /// when it is not. Never shrinks.
    ///
    /// # Panics
    ///
    /// Panics if `minimum` slots of `T` cannot be laid out in memory. Use
    /// [`try_reserve`](Self::try_reserve) to handle that case.
    pub fn reserve(&mut self, minimum: usize) {
        if let Err(err) = self.try_reserve(minimum) {
            panic!("{err}");
        }
    }

    /// Fallible form of [`reserve`](Self::reserve).
    pub fn try_reserve(&mut self, minimum: usize) -> Result<(), ArrayError> {
        if self.capacity() >= minimum {
            return Ok(());
        }
        self.try_reallocate(minimum)
    }

    /// Reallocate to `max(min_capacity, size())` if the buffer is larger.
    pub fn shrink_to_fit(&mut self) {
        let target = self.policy.fitted_capacity(self.size());
        if self.capacity() > target {
            self.reallocate(target);
        }
    }

    /// Apply one step of the shrink policy.
    ///
    /// Called automatically after every [`pop_back`](Self::pop_back) and
    /// [`erase`](Self::erase). With the default policy: if
    /// `size() <= capacity() / 4`, capacity becomes `max(1, capacity() / 2)`.
    /// A single call halves at most once.
    pub fn shrink(&mut self) {
        if let Some(target) = self.policy.shrunk_capacity(self.capacity(), self.size()) {
            self.reallocate(target);
        }
    }

    // ── Cursors ──────────────────────────────────────────────────

    /// Read-only cursor at position 0.
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, 0)
    }

    /// Read-only cursor one past the last element.
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.size())
    }

    /// Read-only cursor at an arbitrary position.
    pub fn cursor_at(&self, position: usize) -> Cursor<'_, T> {
        Cursor::new(self, position)
    }

    /// Mutable cursor at position 0.
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self, 0)
    }

    /// Mutable cursor one past the last element.
    pub fn end_mut(&mut self) -> CursorMut<'_, T> {
        let end = self.size();
        CursorMut::new(self, end)
    }

    /// Mutable cursor at an arbitrary position.
    pub fn cursor_mut_at(&mut self, position: usize) -> CursorMut<'_, T> {
        CursorMut::new(self, position)
    }

    // ── Ownership transfer ───────────────────────────────────────

    /// Move the contents out, leaving `self` empty with no allocation.
    ///
    /// The returned array keeps the buffer, size, capacity and policy; this
    /// is O(1). `self` keeps its policy.
    pub fn take(&mut self) -> Self {
        Self {
            storage: mem::replace(&mut self.storage, RawStorage::new()),
            policy: self.policy,
        }
    }

    /// Move-assign: drop the current contents, adopt `source`'s buffer and
    /// policy, and reset `source` to empty with no allocation.
    ///
    /// Self-transfer cannot be expressed: the borrow checker rejects two
    /// `&mut` to the same array.
    pub fn transfer_from(&mut self, source: &mut Self) {
        let taken = source.take();
        *self = taken;
    }

    fn grow_if_full(&mut self) {
        if self.size() < self.capacity() {
            return;
        }
        let current = self.capacity();
        match self.policy.grown_capacity(current) {
            Some(grown) => self.reallocate(grown),
            None => panic!(
                "{}",
                ArrayError::CapacityOverflow {
                    requested: current.saturating_mul(self.policy.growth_factor),
                }
            ),
        }
    }

    fn reallocate(&mut self, new_capacity: usize) {
        if let Err(err) = self.try_reallocate(new_capacity) {
            panic!("{err}");
        }
    }

    fn try_reallocate(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        let from = self.capacity();
        if from == new_capacity {
            return Ok(());
        }
        self.storage.reallocate(new_capacity)?;
        tracing::trace!(from, to = new_capacity, len = self.size(), "dynamic array reallocated");
        Ok(())
    }
}

// ── Trait impls ──────────────────────────────────────────────────

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    /// Duplicate live elements into a new buffer with the source's capacity.
    fn clone(&self) -> Self {
        let mut copy = Self {
            storage: RawStorage::new(),
            policy: self.policy,
        };
        copy.reallocate(self.capacity());
        for item in self.iter() {
            copy.storage.push(item.clone());
        }
        copy
    }

    /// Reuses the destination buffer when it already has the source's
    /// capacity.
    fn clone_from(&mut self, source: &Self) {
        self.storage.truncate(0);
        self.reallocate(source.capacity());
        for item in source.iter() {
            self.storage.push(item.clone());
        }
        self.policy = source.policy;
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Element-wise equality. Capacity and policy are not compared.
impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T> Deref for DynamicArray<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for DynamicArray<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for DynamicArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

/// Subscript access. Panics when `index >= size()`; use
/// [`DynamicArray::at`] for a recoverable error.
impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Clone> From<&[T]> for DynamicArray<T> {
    fn from(values: &[T]) -> Self {
        values.iter().cloned().collect()
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.storage.into_raw_iter())
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

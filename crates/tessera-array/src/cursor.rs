//! Position-tracking cursors over a [`DynamicArray`].
//!
//! A cursor is a borrow of the array plus an integer position. Because the
//! borrow is held for the cursor's whole lifetime, nothing else can
//! reallocate the array underneath it: the dangling-position hazard of a
//! raw back-pointer becomes a compile error.
//!
//! [`Cursor`] is read-only and `Copy`; [`CursorMut`] can edit elements and
//! insert or erase at its position. Positions step with wrapping
//! arithmetic, so moving before the first element yields a cursor that
//! dereferences to `None` until it is moved back into range.

use std::fmt;
use std::ptr;

use crate::array::DynamicArray;
use crate::error::ArrayError;

/// Read-only cursor into a [`DynamicArray`].
///
/// Two cursors are equal when they borrow the same array (by identity, not
/// by value) and sit at the same position.
pub struct Cursor<'a, T> {
    array: &'a DynamicArray<T>,
    position: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(array: &'a DynamicArray<T>, position: usize) -> Self {
        Self { array, position }
    }

    /// Current position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The element under the cursor, or `None` outside `0..size()`.
    pub fn get(&self) -> Option<&'a T> {
        self.array.as_slice().get(self.position)
    }

    /// Whether the cursor sits one past the last element.
    pub fn is_end(&self) -> bool {
        self.position == self.array.size()
    }

    /// Pre-increment: advance and return the advanced cursor.
    pub fn move_next(&mut self) -> &mut Self {
        self.position = self.position.wrapping_add(1);
        self
    }

    /// Pre-decrement: step back and return the moved cursor.
    pub fn move_prev(&mut self) -> &mut Self {
        self.position = self.position.wrapping_sub(1);
        self
    }

    /// Post-increment: advance, returning a copy at the old position.
    pub fn post_next(&mut self) -> Self {
        let old = *self;
        self.move_next();
        old
    }

    /// Post-decrement: step back, returning a copy at the old position.
    pub fn post_prev(&mut self) -> Self {
        let old = *self;
        self.move_prev();
        old
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.array, other.array) && self.position == other.position
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .field("len", &self.array.size())
            .finish()
    }
}

/// Mutable cursor into a [`DynamicArray`].
///
/// Holds the array's unique borrow, so it is the only handle that can
/// change the array while it lives. Insertions and erasures through the
/// cursor delegate to the index-based operations at the cursor's position
/// and leave the cursor where it was.
pub struct CursorMut<'a, T> {
    array: &'a mut DynamicArray<T>,
    position: usize,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(array: &'a mut DynamicArray<T>, position: usize) -> Self {
        Self { array, position }
    }

    /// Current position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The element under the cursor, or `None` outside `0..size()`.
    pub fn get(&self) -> Option<&T> {
        self.array.as_slice().get(self.position)
    }

    /// Mutable access to the element under the cursor.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.array.as_mut_slice().get_mut(self.position)
    }

    /// Whether the cursor sits one past the last element.
    pub fn is_end(&self) -> bool {
        self.position == self.array.size()
    }

    /// Pre-increment.
    pub fn move_next(&mut self) -> &mut Self {
        self.position = self.position.wrapping_add(1);
        self
    }

    /// Pre-decrement.
    pub fn move_prev(&mut self) -> &mut Self {
        self.position = self.position.wrapping_sub(1);
        self
    }

    /// Post-increment. A mutable cursor cannot be duplicated, so the old
    /// position is returned instead of an old cursor.
    pub fn post_next(&mut self) -> usize {
        let old = self.position;
        self.move_next();
        old
    }

    /// Post-decrement, returning the old position.
    pub fn post_prev(&mut self) -> usize {
        let old = self.position;
        self.move_prev();
        old
    }

    /// Insert `value` before the cursor position.
    ///
    /// The cursor stays at the same position and now refers to the inserted
    /// element. Fails like [`DynamicArray::insert`] when the position is
    /// past the end.
    pub fn insert(&mut self, value: T) -> Result<&mut Self, ArrayError> {
        self.array.insert(self.position, value)?;
        Ok(self)
    }

    /// Erase the element under the cursor and return it.
    ///
    /// The cursor stays at the same position, which now holds the element
    /// that shifted into the gap, or is the end position if the erased
    /// element was last.
    pub fn erase(&mut self) -> Result<T, ArrayError> {
        self.array.erase(self.position)
    }

    /// Reborrow as a read-only cursor at the same position.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(&*self.array, self.position)
    }

    /// The array this cursor edits.
    pub fn array(&self) -> &DynamicArray<T> {
        &*self.array
    }
}

impl<T> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("position", &self.position)
            .field("len", &self.array.size())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_to_five() -> DynamicArray<i32> {
        (1..=5).collect()
    }

    #[test]
    fn mutable_cursor_dereference_writes_through() {
        let mut arr = one_to_five();
        let mut it = arr.begin_mut();
        assert_eq!(it.get(), Some(&1));
        *it.get_mut().unwrap() = 10;
        assert_eq!(arr[0], 10);
    }

    #[test]
    fn empty_array_begin_equals_end() {
        let mut arr: DynamicArray<i32> = DynamicArray::new();
        assert_eq!(arr.begin(), arr.end());
        assert!(arr.begin().is_end());
        assert!(arr.begin_mut().is_end());
    }

    #[test]
    fn begin_to_end_visits_every_element() {
        let arr = one_to_five();
        let mut seen = Vec::new();
        let mut it = arr.begin();
        while it != arr.end() {
            seen.push(*it.get().unwrap());
            it.move_next();
        }
        assert_eq!(seen, [1, 2, 3, 4, 5]);
        assert_eq!(arr.end().get(), None);
    }

    #[test]
    fn pre_and_post_increment() {
        let arr = one_to_five();
        let mut it = arr.begin();
        assert_eq!(it.move_next().get(), Some(&2));
        let old = it.post_next();
        assert_eq!(old.get(), Some(&2));
        assert_eq!(it.get(), Some(&3));
    }

    #[test]
    fn pre_and_post_decrement() {
        let arr = one_to_five();
        let mut it = arr.end();
        assert_eq!(it.move_prev().get(), Some(&5));
        let old = it.post_prev();
        assert_eq!(old.get(), Some(&5));
        assert_eq!(it.get(), Some(&4));
    }

    #[test]
    fn mutable_cursor_increments() {
        let mut arr = one_to_five();
        let mut it = arr.begin_mut();
        assert_eq!(it.post_next(), 0);
        assert_eq!(it.get(), Some(&2));
        it.move_next();
        assert_eq!(it.post_prev(), 2);
        assert_eq!(it.get(), Some(&2));
        it.move_prev();
        assert_eq!(it.position(), 0);
    }

    #[test]
    fn moving_before_begin_dereferences_to_none() {
        let arr = one_to_five();
        let mut it = arr.begin();
        it.move_prev();
        assert_eq!(it.get(), None);
        it.move_next();
        assert_eq!(it, arr.begin());
    }

    #[test]
    fn cursors_over_equal_arrays_are_not_equal() {
        let a = one_to_five();
        let b = one_to_five();
        assert_eq!(a, b);
        assert_ne!(a.begin(), b.begin());
    }

    #[test]
    fn cursor_insert_refers_to_inserted_element() {
        let mut arr = one_to_five();
        let mut it = arr.cursor_mut_at(2);
        it.insert(42).unwrap();
        assert_eq!(it.position(), 2);
        assert_eq!(it.get(), Some(&42));
        assert_eq!(arr.as_slice(), &[1, 2, 42, 3, 4, 5]);
    }

    #[test]
    fn cursor_insert_at_end_appends() {
        let mut arr = one_to_five();
        let mut it = arr.end_mut();
        it.insert(6).unwrap().move_next();
        assert!(it.is_end());
        assert_eq!(arr.back(), Ok(&6));
    }

    #[test]
    fn cursor_insert_past_end_fails() {
        let mut arr = one_to_five();
        let mut it = arr.cursor_mut_at(9);
        assert_eq!(
            it.insert(0).err(),
            Some(ArrayError::IndexOutOfBounds { index: 9, len: 5 })
        );
    }

    #[test]
    fn cursor_erase_refers_to_shifted_element() {
        let mut arr = one_to_five();
        let mut it = arr.cursor_mut_at(1);
        assert_eq!(it.erase(), Ok(2));
        assert_eq!(it.get(), Some(&3));
        assert_eq!(arr.as_slice(), &[1, 3, 4, 5]);
    }

    #[test]
    fn cursor_erase_of_last_element_becomes_end() {
        let mut arr = one_to_five();
        let mut it = arr.cursor_mut_at(4);
        assert_eq!(it.erase(), Ok(5));
        assert!(it.is_end());
        assert!(it.erase().is_err());
    }

    #[test]
    fn erase_through_cursor_survives_shrink() {
        let mut arr: DynamicArray<i32> = (0..8).collect();
        let mut it = arr.begin_mut();
        while !it.array().is_empty() {
            it.erase().unwrap();
        }
        assert_eq!(it.position(), 0);
        assert_eq!(arr.capacity(), 1);
    }

    #[test]
    fn as_cursor_compares_against_read_only_cursors() {
        let mut arr = one_to_five();
        let mut it = arr.begin_mut();
        it.move_next();
        let ro = it.as_cursor();
        assert_eq!(ro.position(), 1);
        assert_eq!(ro.get(), Some(&2));
    }

    #[test]
    fn read_only_cursor_is_copy() {
        let arr = one_to_five();
        let a = arr.cursor_at(3);
        let b = a;
        assert_eq!(a, b);
        assert_eq!(format!("{a:?}"), "Cursor { position: 3, len: 5 }");
    }
}

//! Owning iterator for [`DynamicArray`](crate::DynamicArray).

use std::fmt;
use std::iter::FusedIterator;

use crate::raw::RawIntoIter;

/// Consuming iterator returned by `DynamicArray::into_iter`.
///
/// Yields elements by value from either end. Elements that are never
/// yielded are dropped together with the iterator, and the buffer is
/// released once.
pub struct IntoIter<T> {
    inner: RawIntoIter<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(inner: RawIntoIter<T>) -> Self {
        Self { inner }
    }

    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.inner.remaining();
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

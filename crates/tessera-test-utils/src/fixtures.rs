//! Reusable element and array fixtures.
//!
//! - [`DropTracker`] hands out [`Tracked`] values and counts how many were
//!   created (including clones) and how many were dropped.
//! - [`pushed_range`] builds an array one `push_back` at a time so its
//!   capacity follows the growth law exactly.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use tessera_array::DynamicArray;

#[derive(Default)]
struct Counters {
    created: Cell<usize>,
    dropped: Cell<usize>,
}

/// Factory and ledger for [`Tracked`] values.
///
/// Cloning a tracker shares the same counters.
#[derive(Clone, Default)]
pub struct DropTracker {
    counters: Rc<Counters>,
}

impl DropTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `value` so its drop is recorded.
    pub fn track<T>(&self, value: T) -> Tracked<T> {
        self.counters.created.set(self.counters.created.get() + 1);
        Tracked {
            value,
            counters: Rc::clone(&self.counters),
        }
    }

    /// Values created so far, clones included.
    pub fn created(&self) -> usize {
        self.counters.created.get()
    }

    /// Values dropped so far.
    pub fn dropped(&self) -> usize {
        self.counters.dropped.get()
    }

    /// Values created and not yet dropped.
    pub fn live(&self) -> usize {
        self.created() - self.dropped()
    }
}

impl fmt::Debug for DropTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropTracker")
            .field("created", &self.created())
            .field("dropped", &self.dropped())
            .finish()
    }
}

/// A value whose construction, cloning and dropping is counted by the
/// [`DropTracker`] that created it.
pub struct Tracked<T> {
    value: T,
    counters: Rc<Counters>,
}

impl<T> Tracked<T> {
    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T: Clone> Clone for Tracked<T> {
    fn clone(&self) -> Self {
        self.counters.created.set(self.counters.created.get() + 1);
        Self {
            value: self.value.clone(),
            counters: Rc::clone(&self.counters),
        }
    }
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        self.counters.dropped.set(self.counters.dropped.get() + 1);
    }
}

impl<T: PartialEq> PartialEq for Tracked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Tracked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

/// Build `[0, 1, ..., n-1]` by pushing each value in turn.
pub fn pushed_range(n: i32) -> DynamicArray<i32> {
    let mut array = DynamicArray::new();
    for i in 0..n {
        array.push_back(i);
    }
    array
}

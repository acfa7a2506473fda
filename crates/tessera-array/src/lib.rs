//! Growable contiguous storage with explicit capacity management.
//!
//! [`DynamicArray`] is a from-scratch owning array: it manages its own heap
//! buffer, grows geometrically on exhaustion, gives memory back when it
//! becomes sparsely occupied, and exposes both checked and unchecked element
//! access. This crate is the only one in the workspace that may contain
//! `unsafe` code, and all of it lives in the private `raw` module.
//!
//! # Capacity laws (default policy)
//!
//! | Event | Capacity afterwards |
//! |-------|---------------------|
//! | push/insert into a full buffer of `c` slots | `max(1, 2c)` |
//! | pop/erase leaving `len <= c / 4` | `max(1, c / 2)`, once |
//! | `reserve(n)` with `n > c` | exactly `n` |
//! | `shrink_to_fit()` | `max(1, len)` if smaller than `c` |
//!
//! The laws are configurable through [`CapacityPolicy`].
//!
//! # Cursors
//!
//! [`Cursor`] and [`CursorMut`] pair a borrow of the array with a position,
//! supporting pre/post increment and decrement plus insert/erase at the
//! cursor. The borrow rules out reallocation behind a cursor's back.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod array;
pub mod cursor;
pub mod error;
pub mod into_iter;
pub mod policy;
mod raw;

pub use array::DynamicArray;
pub use cursor::{Cursor, CursorMut};
pub use error::{ArrayError, PolicyError};
pub use into_iter::IntoIter;
pub use policy::CapacityPolicy;

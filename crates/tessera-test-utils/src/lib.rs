//! Test utilities and fixtures for Tessera development.
//!
//! Provides a drop-accounting element type ([`DropTracker`] / [`Tracked`])
//! for verifying that containers release every element exactly once, and
//! small builders for arrays in a known capacity state.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{pushed_range, DropTracker, Tracked};

//! File-backed persistence for the DriveSentry seen set.
//!
//! Stores the set of already-notified item ids as a JSON array on disk.
//! Loading is deliberately lenient (a missing or corrupt file yields an
//! empty set) while saving is strict and atomic.

pub mod file_store;

pub use file_store::FileSeenSetStore;

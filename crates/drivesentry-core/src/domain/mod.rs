//! Domain module - entities and pure logic
//!
//! Contains the domain entities and the delta computation. Everything in
//! this module is free of I/O; external effects live behind the port traits.

pub mod delta;
pub mod errors;
pub mod item;
pub mod newtypes;
pub mod seen_set;

pub use delta::compute_delta;
pub use errors::DomainError;
pub use item::{ItemKind, RemoteItem};
pub use newtypes::{FolderId, ItemId};
pub use seen_set::SeenSet;

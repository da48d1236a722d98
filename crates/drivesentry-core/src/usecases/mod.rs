//! Use cases orchestrating domain logic through the port traits.

pub mod reconcile;

pub use reconcile::{FolderPreview, ReconcileUseCase, RunReport};

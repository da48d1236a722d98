//! Folder lister port (driven/secondary port)
//!
//! Interface for querying the remote storage provider for the current
//! contents of a watched folder. The primary implementation targets the
//! Google Drive v3 API, but the trait is provider-agnostic.
//!
//! ## Design Notes
//!
//! - Uses `anyhow::Result` because errors at port boundaries are
//!   adapter-specific and don't need domain-level classification.
//! - Both operations are pure queries with no side effects on our state;
//!   failures are contained per-folder by the reconciliation driver
//!   (listing failure skips the folder, name-resolution failure degrades
//!   to a placeholder name).

use crate::domain::{FolderId, RemoteItem};

/// Port trait for remote folder queries
#[async_trait::async_trait]
pub trait IFolderLister: Send + Sync {
    /// Lists the items currently present in a folder
    ///
    /// Returns one [`RemoteItem`] per direct child of the folder, in
    /// whatever order the provider yields them. Ordering is applied
    /// later by the delta computation.
    ///
    /// # Arguments
    /// * `folder` - The folder to list
    async fn list_children(&self, folder: &FolderId) -> anyhow::Result<Vec<RemoteItem>>;

    /// Resolves a folder's display name
    ///
    /// Best-effort: callers fall back to a synthesized placeholder
    /// containing the raw id when this fails.
    ///
    /// # Arguments
    /// * `folder` - The folder whose name to resolve
    async fn folder_name(&self, folder: &FolderId) -> anyhow::Result<String>;
}

//! DriveFolderLister - IFolderLister implementation for the Drive API
//!
//! Wraps the [`DriveClient`] and delegates to the [`files`](crate::files)
//! module to fulfil the [`IFolderLister`] port contract.

use anyhow::Result;

use drivesentry_core::domain::{FolderId, RemoteItem};
use drivesentry_core::ports::IFolderLister;

use crate::client::DriveClient;
use crate::files;

/// Folder lister backed by the Google Drive API.
pub struct DriveFolderLister {
    client: DriveClient,
}

impl DriveFolderLister {
    pub fn new(client: DriveClient) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl IFolderLister for DriveFolderLister {
    async fn list_children(&self, folder: &FolderId) -> Result<Vec<RemoteItem>> {
        files::list_children(&self.client, folder).await
    }

    async fn folder_name(&self, folder: &FolderId) -> Result<String> {
        files::get_folder_name(&self.client, folder).await
    }
}

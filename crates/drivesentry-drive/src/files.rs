//! File listing and metadata queries against the Drive API
//!
//! Implements the two read-only queries DriveSentry needs: listing the
//! direct, non-trashed children of a folder and resolving a folder's name.
//! Responses are mapped into the core [`RemoteItem`] domain type.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::Deserialize;
use tracing::{debug, warn};

use drivesentry_core::domain::{FolderId, ItemId, ItemKind, RemoteItem};

use crate::client::DriveClient;
use crate::DriveError;

/// MIME type Drive uses to mark an entry as a folder
pub const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

/// Fields requested for each file in a listing
const LIST_FIELDS: &str = "files(id,name,mimeType,createdTime)";

// ============================================================================
// Drive API response types
// ============================================================================

/// Response from `GET /files`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileListResponse {
    /// The matching files; absent when the folder is empty
    #[serde(default)]
    files: Vec<DriveFileResource>,
}

/// A single file resource from a listing
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DriveFileResource {
    /// Drive item ID
    id: String,
    /// Item display name
    name: Option<String>,
    /// MIME type; folders carry [`FOLDER_MIME_TYPE`]
    mime_type: Option<String>,
    /// RFC 3339 creation timestamp; kept as a string so one malformed
    /// value does not fail the whole listing
    created_time: Option<String>,
}

/// Response from `GET /files/{id}?fields=name`
#[derive(Debug, Deserialize)]
struct FolderMetadata {
    name: String,
}

impl DriveFileResource {
    /// Converts the raw resource into a domain [`RemoteItem`].
    ///
    /// Returns `None` when the id is unusable. An unparsable timestamp
    /// degrades to `created_at: None` rather than dropping the item.
    fn into_remote_item(self) -> Option<RemoteItem> {
        let id = match ItemId::new(self.id) {
            Ok(id) => id,
            Err(err) => {
                warn!(error = %err, "skipping listing entry with invalid id");
                return None;
            }
        };

        let kind = match self.mime_type.as_deref() {
            Some(FOLDER_MIME_TYPE) => ItemKind::Folder,
            _ => ItemKind::File,
        };

        let created_at = self.created_time.as_deref().and_then(parse_created_time);

        Some(RemoteItem {
            id,
            name: self.name.unwrap_or_else(|| "Unnamed".to_string()),
            kind,
            created_at,
        })
    }
}

/// Parses an RFC 3339 timestamp, returning `None` on malformed input.
fn parse_created_time(raw: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => Some(dt.with_timezone(&Utc)),
        Err(err) => {
            warn!(raw, error = %err, "unparsable createdTime; treating as unknown");
            None
        }
    }
}

// ============================================================================
// Queries
// ============================================================================

/// Lists the direct, non-trashed children of `folder`.
///
/// Makes `GET /files?q='{id}' in parents and trashed = false`, requesting
/// only the fields DriveSentry consumes. Items arrive in API order; the
/// caller is responsible for any ordering it needs.
pub async fn list_children(client: &DriveClient, folder: &FolderId) -> Result<Vec<RemoteItem>> {
    let query = format!("'{}' in parents and trashed = false", folder.as_str());
    debug!(folder = %folder, "listing folder children");

    let response = client
        .request(Method::GET, "/files")
        .query(&[("q", query.as_str()), ("fields", LIST_FIELDS)])
        .send()
        .await
        .context("Failed to send file listing request")?;

    let status = response.status();
    if !status.is_success() {
        return Err(DriveError::from_status(status, "/files").into());
    }

    let listing: FileListResponse = response
        .json()
        .await
        .context("Failed to parse file listing response")?;

    let items: Vec<RemoteItem> = listing
        .files
        .into_iter()
        .filter_map(DriveFileResource::into_remote_item)
        .collect();

    debug!(folder = %folder, items = items.len(), "listing complete");
    Ok(items)
}

/// Resolves the display name of `folder` via `GET /files/{id}?fields=name`.
pub async fn get_folder_name(client: &DriveClient, folder: &FolderId) -> Result<String> {
    let path = format!("/files/{}", folder.as_str());
    debug!(folder = %folder, "fetching folder name");

    let response = client
        .request(Method::GET, &path)
        .query(&[("fields", "name")])
        .send()
        .await
        .context("Failed to send folder metadata request")?;

    let status = response.status();
    if !status.is_success() {
        return Err(DriveError::from_status(status, &path).into());
    }

    let metadata: FolderMetadata = response
        .json()
        .await
        .context("Failed to parse folder metadata response")?;

    Ok(metadata.name)
}

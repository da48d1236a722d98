//! Google Drive API client
//!
//! Provides a typed HTTP client for the Google Drive v3 REST API.
//! Handles authentication headers, JSON deserialization, and endpoint
//! construction.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use drivesentry_drive::client::DriveClient;
//! use drivesentry_drive::files;
//! use drivesentry_core::domain::FolderId;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = DriveClient::new("access-token-here");
//! let folder = FolderId::new("1AbCdEfGhIjK")?;
//! let items = files::list_children(&client, &folder).await?;
//! println!("{} items", items.len());
//! # Ok(())
//! # }
//! ```

use reqwest::{Client, Method, RequestBuilder};
use tracing::debug;

/// Base URL for the Google Drive API v3
const DRIVE_BASE_URL: &str = "https://www.googleapis.com/drive/v3";

/// HTTP client for Google Drive API calls
///
/// Wraps `reqwest::Client` with authentication headers and base URL
/// construction for the Google Drive v3 API.
pub struct DriveClient {
    /// The underlying HTTP client
    client: Client,
    /// Base URL for API requests
    base_url: String,
    /// Current OAuth2 access token
    access_token: String,
}

impl DriveClient {
    /// Creates a new DriveClient with the given access token
    ///
    /// # Arguments
    /// * `access_token` - A valid OAuth2 access token for Google Drive
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: DRIVE_BASE_URL.to_string(),
            access_token: access_token.into(),
        }
    }

    /// Creates a new DriveClient with a custom base URL (useful for testing)
    ///
    /// # Arguments
    /// * `access_token` - A valid OAuth2 access token
    /// * `base_url` - Custom base URL for API requests
    pub fn with_base_url(access_token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            access_token: access_token.into(),
        }
    }

    /// Updates the access token (e.g., after a token refresh)
    ///
    /// # Arguments
    /// * `token` - The new access token
    pub fn set_access_token(&mut self, token: impl Into<String>) {
        self.access_token = token.into();
        debug!("Updated DriveClient access token");
    }

    /// Returns a reference to the current access token
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Creates an authenticated request builder for the given method and path
    ///
    /// Automatically prepends the base URL and adds the Authorization header.
    ///
    /// # Arguments
    /// * `method` - HTTP method (GET, POST, etc.)
    /// * `path` - API path relative to base URL (e.g., "/files")
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, &url)
            .bearer_auth(&self.access_token)
    }

    /// Returns the base URL for API requests
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

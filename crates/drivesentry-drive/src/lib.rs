//! DriveSentry Drive - Google Drive API client
//!
//! Provides an async client for the Google Drive v3 REST API, covering the
//! read-only operations DriveSentry needs:
//! - Listing the direct children of a folder
//! - Resolving a folder's display name
//!
//! ## Modules
//!
//! - [`auth`] - Access token resolution (environment / configuration)
//! - [`client`] - Google Drive API HTTP client
//! - [`files`] - File listing and metadata queries
//! - [`provider`] - Folder-lister port implementation backed by the client

pub mod auth;
pub mod client;
pub mod files;
pub mod provider;

use thiserror::Error;

/// Errors that can occur when communicating with the Google Drive API
#[derive(Debug, Error)]
pub enum DriveError {
    /// Authentication credentials are invalid or expired
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Insufficient permissions for the requested resource
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The requested folder or file does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// A server-side error occurred (5xx)
    #[error("Server error: {0}")]
    ServerError(String),

    /// A network-level error occurred
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// The API response could not be parsed or was malformed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl DriveError {
    /// Maps an unexpected HTTP status to the matching error variant.
    pub(crate) fn from_status(status: reqwest::StatusCode, context: &str) -> Self {
        match status.as_u16() {
            401 => DriveError::Unauthorized(context.to_string()),
            403 => DriveError::Forbidden(context.to_string()),
            404 => DriveError::NotFound(context.to_string()),
            500..=599 => DriveError::ServerError(format!("{status} on {context}")),
            _ => DriveError::InvalidResponse(format!("unexpected status {status} on {context}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_status_maps_common_codes() {
        use reqwest::StatusCode;

        assert!(matches!(
            DriveError::from_status(StatusCode::UNAUTHORIZED, "/files"),
            DriveError::Unauthorized(_)
        ));
        assert!(matches!(
            DriveError::from_status(StatusCode::FORBIDDEN, "/files"),
            DriveError::Forbidden(_)
        ));
        assert!(matches!(
            DriveError::from_status(StatusCode::NOT_FOUND, "/files/x"),
            DriveError::NotFound(_)
        ));
        assert!(matches!(
            DriveError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "/files"),
            DriveError::ServerError(_)
        ));
        assert!(matches!(
            DriveError::from_status(StatusCode::IM_A_TEAPOT, "/files"),
            DriveError::InvalidResponse(_)
        ));
    }
}

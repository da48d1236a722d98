//! Domain error types
//!
//! This module defines error types specific to domain operations,
//! including identifier validation failures and startup configuration
//! problems.

use thiserror::Error;

/// Errors that can occur in domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Invalid item identifier (empty or whitespace-only)
    #[error("Invalid item id: {0}")]
    InvalidItemId(String),

    /// Invalid folder identifier (empty or whitespace-only)
    #[error("Invalid folder id: {0}")]
    InvalidFolderId(String),

    /// Generic validation failure
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// No watched folders configured; a run cannot start
    #[error("No watched folders configured")]
    NoWatchedFolders,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DomainError::InvalidItemId("  ".to_string());
        assert_eq!(err.to_string(), "Invalid item id:   ");

        let err = DomainError::InvalidFolderId("".to_string());
        assert_eq!(err.to_string(), "Invalid folder id: ");

        let err = DomainError::NoWatchedFolders;
        assert_eq!(err.to_string(), "No watched folders configured");
    }

    #[test]
    fn test_error_equality() {
        let err1 = DomainError::ValidationFailed("x".to_string());
        let err2 = DomainError::ValidationFailed("x".to_string());
        let err3 = DomainError::ValidationFailed("y".to_string());

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }
}

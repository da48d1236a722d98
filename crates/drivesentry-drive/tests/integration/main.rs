//! Integration tests for drivesentry-drive
//!
//! Uses wiremock to simulate the Google Drive API and verifies
//! end-to-end behavior of folder listings and metadata queries.

mod common;

mod test_listing;

//! Integration tests for drivesentry-notify
//!
//! Uses wiremock to simulate Discord's webhook endpoint.

mod test_webhook;

//! Shared test helpers for Drive API integration tests
//!
//! Provides wiremock-based mock server setup for Google Drive API
//! endpoints. Each helper mounts the necessary mock endpoints and returns
//! a configured DriveClient pointing at the mock server.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use drivesentry_drive::client::DriveClient;

/// Starts a mock server and returns a (MockServer, DriveClient) pair
/// with the client pointing at the server.
pub async fn setup_drive_mock() -> (MockServer, DriveClient) {
    let server = MockServer::start().await;
    let client = DriveClient::with_base_url("test-access-token", server.uri());
    (server, client)
}

/// Mounts a `GET /files` listing for the given folder id.
pub async fn mount_file_list(server: &MockServer, folder_id: &str, files: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/files"))
        .and(query_param(
            "q",
            format!("'{folder_id}' in parents and trashed = false"),
        ))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "files": files })),
        )
        .mount(server)
        .await;
}

/// Mounts a `GET /files/{id}` metadata response carrying a folder name.
pub async fn mount_folder_name(server: &MockServer, folder_id: &str, name: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/files/{folder_id}")))
        .and(query_param("fields", "name"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "name": name })))
        .mount(server)
        .await;
}

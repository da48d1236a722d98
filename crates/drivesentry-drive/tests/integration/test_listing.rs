//! Integration tests for folder listings and metadata queries

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use drivesentry_core::domain::{FolderId, ItemKind};
use drivesentry_core::ports::IFolderLister;
use drivesentry_drive::provider::DriveFolderLister;
use drivesentry_drive::{files, DriveError};

use crate::common::{mount_file_list, mount_folder_name, setup_drive_mock};

fn folder(id: &str) -> FolderId {
    FolderId::new(id).unwrap()
}

#[tokio::test]
async fn list_children_maps_items() {
    let (server, client) = setup_drive_mock().await;
    mount_file_list(
        &server,
        "folder-1",
        serde_json::json!([
            {
                "id": "file-a",
                "name": "notes.txt",
                "mimeType": "text/plain",
                "createdTime": "2024-03-01T09:00:00.000Z"
            },
            {
                "id": "sub-b",
                "name": "Archive",
                "mimeType": "application/vnd.google-apps.folder",
                "createdTime": "2024-02-01T09:00:00.000Z"
            }
        ]),
    )
    .await;

    let items = files::list_children(&client, &folder("folder-1"))
        .await
        .unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id.as_str(), "file-a");
    assert_eq!(items[0].kind, ItemKind::File);
    assert!(items[0].created_at.is_some());
    assert_eq!(items[1].id.as_str(), "sub-b");
    assert_eq!(items[1].kind, ItemKind::Folder);
}

#[tokio::test]
async fn list_children_sends_expected_query() {
    let (server, client) = setup_drive_mock().await;

    Mock::given(method("GET"))
        .and(path("/files"))
        .and(query_param(
            "q",
            "'folder-1' in parents and trashed = false",
        ))
        .and(query_param("fields", "files(id,name,mimeType,createdTime)"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "files": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let items = files::list_children(&client, &folder("folder-1"))
        .await
        .unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn list_children_tolerates_malformed_timestamp() {
    let (server, client) = setup_drive_mock().await;
    mount_file_list(
        &server,
        "folder-1",
        serde_json::json!([
            { "id": "file-a", "name": "ok.txt", "createdTime": "2024-03-01T09:00:00Z" },
            { "id": "file-b", "name": "odd.txt", "createdTime": "garbage" }
        ]),
    )
    .await;

    let items = files::list_children(&client, &folder("folder-1"))
        .await
        .unwrap();

    assert_eq!(items.len(), 2);
    assert!(items[0].created_at.is_some());
    assert!(items[1].created_at.is_none());
}

#[tokio::test]
async fn list_children_unauthorized_is_an_error() {
    let (server, client) = setup_drive_mock().await;

    Mock::given(method("GET"))
        .and(path("/files"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = files::list_children(&client, &folder("folder-1"))
        .await
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<DriveError>(),
        Some(DriveError::Unauthorized(_))
    ));
}

#[tokio::test]
async fn folder_name_is_fetched() {
    let (server, client) = setup_drive_mock().await;
    mount_folder_name(&server, "folder-1", "Quarterly Reports").await;

    let name = files::get_folder_name(&client, &folder("folder-1"))
        .await
        .unwrap();
    assert_eq!(name, "Quarterly Reports");
}

#[tokio::test]
async fn folder_name_not_found_is_an_error() {
    let (server, client) = setup_drive_mock().await;

    Mock::given(method("GET"))
        .and(path("/files/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = files::get_folder_name(&client, &folder("missing"))
        .await
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<DriveError>(),
        Some(DriveError::NotFound(_))
    ));
}

#[tokio::test]
async fn provider_implements_the_port() {
    let (server, client) = setup_drive_mock().await;
    mount_file_list(
        &server,
        "folder-1",
        serde_json::json!([{ "id": "file-a", "name": "a.txt" }]),
    )
    .await;
    mount_folder_name(&server, "folder-1", "Inbox").await;

    let lister = DriveFolderLister::new(client);

    let items = lister.list_children(&folder("folder-1")).await.unwrap();
    assert_eq!(items.len(), 1);

    let name = lister.folder_name(&folder("folder-1")).await.unwrap();
    assert_eq!(name, "Inbox");
}

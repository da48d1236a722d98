//! Integration tests for webhook delivery

use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use drivesentry_core::domain::{ItemId, ItemKind, RemoteItem};
use drivesentry_core::ports::INotifier;
use drivesentry_notify::DiscordNotifier;

fn item(id: &str, name: &str, kind: ItemKind) -> RemoteItem {
    RemoteItem {
        id: ItemId::new(id).unwrap(),
        name: name.to_string(),
        kind,
        created_at: None,
    }
}

#[tokio::test]
async fn delivery_succeeds_on_204() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/webhook"))
        .and(body_partial_json(serde_json::json!({
            "embeds": [{
                "title": "📄 New File Uploaded in **Reports**",
                "description": "**report.pdf**",
                "color": 0x5865F2
            }]
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let notifier = DiscordNotifier::new(format!("{}/webhook", server.uri()));
    let result = notifier
        .notify_new_item(&item("file-1", "report.pdf", ItemKind::File), "Reports")
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn delivery_fails_on_client_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/webhook"))
        .respond_with(
            ResponseTemplate::new(400).set_body_string(r#"{"message": "Invalid Webhook Token"}"#),
        )
        .mount(&server)
        .await;

    let notifier = DiscordNotifier::new(format!("{}/webhook", server.uri()));
    let err = notifier
        .notify_new_item(&item("file-1", "report.pdf", ItemKind::File), "Reports")
        .await
        .unwrap_err();
    assert!(err.to_string().contains("400"));
}

#[tokio::test]
async fn folder_embed_links_to_the_folder() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/webhook"))
        .and(body_partial_json(serde_json::json!({
            "embeds": [{
                "title": "📁 New Folder Uploaded in **Inbox**",
                "fields": [
                    {
                        "name": "🔗 View",
                        "value": "[Open Folder](https://drive.google.com/drive/folders/sub-1)",
                        "inline": true
                    },
                    {
                        "name": "⬇️ Download",
                        "value": "[Download Folder](https://drive.google.com/drive/folders/sub-1)",
                        "inline": true
                    }
                ]
            }]
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let notifier = DiscordNotifier::new(format!("{}/webhook", server.uri()));
    let result = notifier
        .notify_new_item(&item("sub-1", "Archive", ItemKind::Folder), "Inbox")
        .await;
    assert!(result.is_ok());
}

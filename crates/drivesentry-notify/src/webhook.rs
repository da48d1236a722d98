//! Discord webhook client and embed construction
//!
//! Builds one embed per item and posts it to the configured webhook URL.
//! Discord answers `204 No Content` on success; any non-2xx status is
//! treated as a delivery failure so the caller can retry the item on the
//! next run.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use drivesentry_core::domain::RemoteItem;
use drivesentry_core::ports::INotifier;

/// Discord blurple, used as the embed accent color.
const EMBED_COLOR: u32 = 0x5865F2;

// ============================================================================
// Webhook payload types
// ============================================================================

/// Top-level webhook payload: a list of embeds.
#[derive(Debug, Serialize)]
struct WebhookMessage {
    embeds: Vec<Embed>,
}

#[derive(Debug, Serialize)]
struct Embed {
    title: String,
    description: String,
    color: u32,
    fields: Vec<EmbedField>,
}

#[derive(Debug, Serialize)]
struct EmbedField {
    name: String,
    value: String,
    inline: bool,
}

/// Drive links for one item: where to open it and where to download it.
/// Folders have no separate download URL, so both point at the folder.
fn item_links(item: &RemoteItem) -> (String, String) {
    if item.is_folder() {
        let view = format!("https://drive.google.com/drive/folders/{}", item.id);
        (view.clone(), view)
    } else {
        (
            format!("https://drive.google.com/file/d/{}/view", item.id),
            format!("https://drive.google.com/uc?id={}&export=download", item.id),
        )
    }
}

fn build_message(item: &RemoteItem, folder_name: &str) -> WebhookMessage {
    let (view_link, download_link) = item_links(item);
    let emoji = if item.is_folder() { "📁" } else { "📄" };
    let item_type = item.kind.label();

    WebhookMessage {
        embeds: vec![Embed {
            title: format!("{emoji} New {item_type} Uploaded in **{folder_name}**"),
            description: format!("**{}**", item.name),
            color: EMBED_COLOR,
            fields: vec![
                EmbedField {
                    name: "🔗 View".to_string(),
                    value: format!("[Open {item_type}]({view_link})"),
                    inline: true,
                },
                EmbedField {
                    name: "⬇️ Download".to_string(),
                    value: format!("[Download {item_type}]({download_link})"),
                    inline: true,
                },
            ],
        }],
    }
}

// ============================================================================
// DiscordNotifier
// ============================================================================

/// Notifier that posts embeds to a Discord webhook.
pub struct DiscordNotifier {
    client: reqwest::Client,
    webhook_url: String,
}

impl DiscordNotifier {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            webhook_url: webhook_url.into(),
        }
    }

    pub fn webhook_url(&self) -> &str {
        &self.webhook_url
    }
}

#[async_trait::async_trait]
impl INotifier for DiscordNotifier {
    async fn notify_new_item(&self, item: &RemoteItem, folder_name: &str) -> Result<()> {
        let message = build_message(item, folder_name);

        let response = self
            .client
            .post(&self.webhook_url)
            .json(&message)
            .send()
            .await
            .context("Failed to send webhook request")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("webhook returned {status}: {body}");
        }

        debug!(item = %item.id, status = %status, "webhook delivered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drivesentry_core::domain::{ItemId, ItemKind};

    fn file_item() -> RemoteItem {
        RemoteItem {
            id: ItemId::new("file-123").unwrap(),
            name: "report.pdf".to_string(),
            kind: ItemKind::File,
            created_at: None,
        }
    }

    fn folder_item() -> RemoteItem {
        RemoteItem {
            id: ItemId::new("sub-456").unwrap(),
            name: "Archive".to_string(),
            kind: ItemKind::Folder,
            created_at: None,
        }
    }

    #[test]
    fn file_links_differ_for_view_and_download() {
        let (view, download) = item_links(&file_item());
        assert_eq!(view, "https://drive.google.com/file/d/file-123/view");
        assert_eq!(
            download,
            "https://drive.google.com/uc?id=file-123&export=download"
        );
    }

    #[test]
    fn folder_links_both_point_at_the_folder() {
        let (view, download) = item_links(&folder_item());
        assert_eq!(view, "https://drive.google.com/drive/folders/sub-456");
        assert_eq!(view, download);
    }

    #[test]
    fn file_message_shape() {
        let message = build_message(&file_item(), "Reports");
        let json = serde_json::to_value(&message).unwrap();

        let embed = &json["embeds"][0];
        assert_eq!(
            embed["title"],
            "📄 New File Uploaded in **Reports**"
        );
        assert_eq!(embed["description"], "**report.pdf**");
        assert_eq!(embed["color"], 0x5865F2);

        let fields = embed["fields"].as_array().unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0]["name"], "🔗 View");
        assert_eq!(
            fields[0]["value"],
            "[Open File](https://drive.google.com/file/d/file-123/view)"
        );
        assert_eq!(fields[0]["inline"], true);
        assert_eq!(fields[1]["name"], "⬇️ Download");
        assert_eq!(
            fields[1]["value"],
            "[Download File](https://drive.google.com/uc?id=file-123&export=download)"
        );
        assert_eq!(fields[1]["inline"], true);
    }

    #[test]
    fn folder_message_uses_folder_emoji_and_label() {
        let message = build_message(&folder_item(), "Inbox");
        let json = serde_json::to_value(&message).unwrap();

        let embed = &json["embeds"][0];
        assert_eq!(
            embed["title"],
            "📁 New Folder Uploaded in **Inbox**"
        );
        assert_eq!(
            embed["fields"][0]["value"],
            "[Open Folder](https://drive.google.com/drive/folders/sub-456)"
        );
    }
}

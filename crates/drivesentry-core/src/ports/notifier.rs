//! Notifier port (driven/secondary port)
//!
//! Interface for delivering one notification per newly discovered item.
//! The primary implementation posts a Discord webhook embed, but the
//! trait carries no transport detail.
//!
//! ## Design Notes
//!
//! - Exactly one call per undelivered item; no batching.
//! - A failed send is a per-item condition: the driver logs it, leaves
//!   the item unmarked so the next run retries it, and continues with
//!   the remaining items. This port therefore needs no retry logic.

use crate::domain::RemoteItem;

/// Port trait for outbound item notifications
#[async_trait::async_trait]
pub trait INotifier: Send + Sync {
    /// Sends one notification for a newly discovered item
    ///
    /// # Arguments
    /// * `item` - The item to announce
    /// * `folder_name` - Resolved display name of the folder the item
    ///   appeared in (may be a placeholder if resolution failed)
    async fn notify_new_item(&self, item: &RemoteItem, folder_name: &str) -> anyhow::Result<()>;
}

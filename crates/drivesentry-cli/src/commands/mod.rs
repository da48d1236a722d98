//! CLI command implementations

pub mod config;
pub mod preview;
pub mod run;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use drivesentry_core::config::Config;
use drivesentry_core::domain::FolderId;
use drivesentry_core::usecases::ReconcileUseCase;
use drivesentry_drive::client::DriveClient;
use drivesentry_drive::provider::DriveFolderLister;
use drivesentry_notify::DiscordNotifier;
use drivesentry_store::FileSeenSetStore;

use crate::output::{get_formatter, OutputFormat};

/// Loads the configuration and fails on any validation error.
///
/// Validation problems are fatal: a run must never start from a broken
/// configuration.
fn load_valid_config(config_path: &Path, format: OutputFormat) -> Result<Config> {
    let config = Config::load(config_path)
        .with_context(|| format!("Failed to load configuration from {}", config_path.display()))?;

    let errors = config.validate();
    if !errors.is_empty() {
        let formatter = get_formatter(format);
        for error in &errors {
            formatter.error(&error.to_string());
        }
        anyhow::bail!("configuration is invalid ({} error(s))", errors.len());
    }

    Ok(config)
}

/// Wires the reconciliation use case from configuration.
///
/// When `with_notifier` is false (preview mode) the webhook URL is not
/// required and the notifier slot is filled with a no-op.
fn build_usecase(config: &Config, with_notifier: bool) -> Result<(ReconcileUseCase, Vec<FolderId>)> {
    let folders = config.watched_folders()?;

    let token = drivesentry_drive::auth::resolve_access_token(config.drive.access_token.as_deref())?;
    let lister = Arc::new(DriveFolderLister::new(DriveClient::new(token)));

    let notifier: Arc<dyn drivesentry_core::ports::INotifier + Send + Sync> = if with_notifier {
        let webhook_url =
            drivesentry_notify::resolve_webhook_url(config.notify.webhook_url.as_deref())?;
        Arc::new(DiscordNotifier::new(webhook_url))
    } else {
        Arc::new(NoopNotifier)
    };

    let store = Arc::new(FileSeenSetStore::new(config.state.seen_file.clone()));

    Ok((ReconcileUseCase::new(lister, notifier, store), folders))
}

/// Notifier that delivers nothing, used for preview wiring.
struct NoopNotifier;

#[async_trait::async_trait]
impl drivesentry_core::ports::INotifier for NoopNotifier {
    async fn notify_new_item(
        &self,
        _item: &drivesentry_core::domain::RemoteItem,
        _folder_name: &str,
    ) -> Result<()> {
        Ok(())
    }
}

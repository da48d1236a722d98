//! Reconciliation use case: poll watched folders, notify new items once.
//!
//! One execution walks every watched folder, computes the unseen items,
//! delivers a notification per item in chronological order, and persists
//! the updated seen set exactly once at the end of the run.
//!
//! Failure containment is deliberate: a folder that cannot be listed is
//! skipped, an item whose notification fails stays unmarked so the next
//! run retries it, and only a failure to persist the seen set aborts the
//! run with an error.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::domain::{compute_delta, FolderId, RemoteItem, SeenSet};
use crate::ports::{IFolderLister, INotifier, ISeenSetStore};

// ---------------------------------------------------------------------------
// Run report
// ---------------------------------------------------------------------------

/// Summary of a single reconciliation run.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct RunReport {
    /// Folders whose listing succeeded and were fully processed.
    pub folders_processed: usize,
    /// Folders skipped because their listing failed.
    pub folders_skipped: usize,
    /// Items successfully notified (and marked seen) this run.
    pub items_notified: usize,
    /// Items whose notification failed; they stay unmarked for retry.
    pub items_failed: usize,
    /// Human-readable descriptions of every non-fatal error encountered.
    pub errors: Vec<String>,
    /// Wall-clock duration of the run in milliseconds.
    pub duration_ms: u64,
}

impl RunReport {
    /// Whether the run completed without any skipped folder or failed item.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Unseen items for one folder, as produced by [`ReconcileUseCase::preview`].
#[derive(Debug, Clone, serde::Serialize)]
pub struct FolderPreview {
    pub folder: FolderId,
    pub folder_name: String,
    pub pending: Vec<RemoteItem>,
}

// ---------------------------------------------------------------------------
// Use case
// ---------------------------------------------------------------------------

/// Use case for reconciling watched folders against the seen set.
pub struct ReconcileUseCase {
    lister: Arc<dyn IFolderLister + Send + Sync>,
    notifier: Arc<dyn INotifier + Send + Sync>,
    seen_store: Arc<dyn ISeenSetStore + Send + Sync>,
}

impl ReconcileUseCase {
    pub fn new(
        lister: Arc<dyn IFolderLister + Send + Sync>,
        notifier: Arc<dyn INotifier + Send + Sync>,
        seen_store: Arc<dyn ISeenSetStore + Send + Sync>,
    ) -> Self {
        Self {
            lister,
            notifier,
            seen_store,
        }
    }

    /// Execute one reconciliation run over `folders`.
    ///
    /// The seen set is loaded once at the start and saved exactly once at
    /// the end, whether or not any folder or item failed along the way.
    /// The only error this method returns is a failure to persist the
    /// seen set; everything else is recorded in the [`RunReport`].
    pub async fn execute(&self, folders: &[FolderId]) -> anyhow::Result<RunReport> {
        if folders.is_empty() {
            anyhow::bail!("no folders to watch; configure watch.folder_ids");
        }

        let started = Instant::now();
        let mut seen = self.seen_store.load().await;
        let mut report = RunReport::default();

        info!(
            folders = folders.len(),
            seen_items = seen.len(),
            "starting reconciliation run"
        );

        for folder in folders {
            self.process_folder(folder, &mut seen, &mut report).await;
        }

        // Persist unconditionally: items notified before a later failure
        // must never be re-announced on the next run.
        self.seen_store.save(&seen).await?;

        report.duration_ms = started.elapsed().as_millis() as u64;
        info!(
            processed = report.folders_processed,
            skipped = report.folders_skipped,
            notified = report.items_notified,
            failed = report.items_failed,
            duration_ms = report.duration_ms,
            "reconciliation run complete"
        );
        Ok(report)
    }

    /// Compute the pending (unseen) items per folder without notifying
    /// or persisting anything.
    pub async fn preview(&self, folders: &[FolderId]) -> anyhow::Result<Vec<FolderPreview>> {
        if folders.is_empty() {
            anyhow::bail!("no folders to watch; configure watch.folder_ids");
        }

        let seen = self.seen_store.load().await;
        let mut previews = Vec::with_capacity(folders.len());

        for folder in folders {
            let items = match self.lister.list_children(folder).await {
                Ok(items) => items,
                Err(err) => {
                    warn!(folder = %folder, error = %err, "failed to list folder; skipping");
                    continue;
                }
            };
            let folder_name = self.resolve_folder_name(folder).await;
            previews.push(FolderPreview {
                folder: folder.clone(),
                folder_name,
                pending: compute_delta(items, &seen),
            });
        }

        Ok(previews)
    }

    /// Process one folder. Never fails: listing errors skip the folder,
    /// notification errors leave the item unmarked; both are recorded in
    /// the report.
    async fn process_folder(&self, folder: &FolderId, seen: &mut SeenSet, report: &mut RunReport) {
        let items = match self.lister.list_children(folder).await {
            Ok(items) => items,
            Err(err) => {
                warn!(folder = %folder, error = %err, "failed to list folder; skipping");
                report.folders_skipped += 1;
                report.errors.push(format!("folder {folder}: {err}"));
                return;
            }
        };

        let delta = compute_delta(items, seen);
        debug!(folder = %folder, new_items = delta.len(), "computed delta");

        if delta.is_empty() {
            report.folders_processed += 1;
            return;
        }

        // Resolved once per folder, only when there is something to announce.
        let folder_name = self.resolve_folder_name(folder).await;

        for item in delta {
            match self.notifier.notify_new_item(&item, &folder_name).await {
                Ok(()) => {
                    seen.mark(item.id.clone());
                    report.items_notified += 1;
                    info!(item = %item.id, name = %item.name, folder = %folder_name, "notified new item");
                }
                Err(err) => {
                    // Leave the id unmarked so the next run retries it.
                    warn!(item = %item.id, error = %err, "notification failed; will retry next run");
                    report.items_failed += 1;
                    report.errors.push(format!("item {}: {err}", item.id));
                }
            }
        }

        report.folders_processed += 1;
    }

    /// Resolve a folder's display name, falling back to a placeholder so
    /// a metadata failure never blocks notifications.
    async fn resolve_folder_name(&self, folder: &FolderId) -> String {
        match self.lister.folder_name(folder).await {
            Ok(name) => name,
            Err(err) => {
                warn!(folder = %folder, error = %err, "failed to resolve folder name");
                format!("Unknown Folder ({folder})")
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

//! JSON file implementation of [`ISeenSetStore`].

use std::path::PathBuf;

use tracing::{debug, warn};

use drivesentry_core::domain::{ItemId, SeenSet};
use drivesentry_core::ports::ISeenSetStore;

/// Persists the seen set as a sorted JSON array of item ids.
///
/// A missing file means a fresh start and loads as an empty set. A file
/// that cannot be parsed also loads as an empty set, with a warning, so
/// a corrupted state file never wedges the tool; the cost is that every
/// currently-visible item gets announced once more on the next run.
///
/// Saves are atomic: the new content is written to a sibling temp file
/// and renamed over the target, so a crash mid-write never leaves a
/// truncated state file behind.
pub struct FileSeenSetStore {
    path: PathBuf,
}

impl FileSeenSetStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[async_trait::async_trait]
impl ISeenSetStore for FileSeenSetStore {
    async fn load(&self) -> SeenSet {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no seen-set file; starting empty");
                return SeenSet::new();
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "failed to read seen-set file; starting empty");
                return SeenSet::new();
            }
        };

        let ids: Vec<String> = match serde_json::from_str(&content) {
            Ok(ids) => ids,
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "seen-set file is corrupt; starting empty");
                return SeenSet::new();
            }
        };

        ids.into_iter()
            .filter_map(|id| match ItemId::new(id) {
                Ok(id) => Some(id),
                Err(err) => {
                    warn!(error = %err, "skipping invalid id in seen-set file");
                    None
                }
            })
            .collect()
    }

    async fn save(&self, set: &SeenSet) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let ids: Vec<&str> = set.iter().map(|id| id.as_str()).collect();
        let content = serde_json::to_string_pretty(&ids)?;

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, content).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        debug!(path = %self.path.display(), items = set.len(), "saved seen set");
        Ok(())
    }
}

//! Run command - one reconciliation pass over the watched folders
//!
//! Loads the configuration, wires the Drive lister, Discord notifier, and
//! file-backed seen set together, executes the reconciliation use case,
//! and reports the outcome. Exits non-zero only when the run itself could
//! not complete (bad configuration, missing credentials, or a failure to
//! persist the seen set); skipped folders and failed notifications are
//! reported but leave the exit code at zero.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use crate::commands::{build_usecase, load_valid_config};
use crate::output::{get_formatter, OutputFormat};

#[derive(Debug, Args)]
pub struct RunCommand {}

impl RunCommand {
    pub async fn execute(&self, config_path: &Path, format: OutputFormat) -> Result<()> {
        let formatter = get_formatter(format);

        let config = load_valid_config(config_path, format)?;
        let (usecase, folders) = build_usecase(&config, true)?;

        info!(folders = folders.len(), "starting run");
        let report = usecase.execute(&folders).await?;

        if format.is_json() {
            let json = serde_json::to_value(&report).context("Failed to serialize run report")?;
            formatter.print_json(&json);
            return Ok(());
        }

        formatter.success(&format!(
            "Run complete: {} new item(s) notified",
            report.items_notified
        ));
        formatter.kv("Folders processed", &report.folders_processed.to_string());
        formatter.kv("Folders skipped", &report.folders_skipped.to_string());
        formatter.kv("Items notified", &report.items_notified.to_string());
        formatter.kv("Items failed", &report.items_failed.to_string());
        formatter.kv("Duration", &format!("{} ms", report.duration_ms));

        for error in &report.errors {
            formatter.warn(error);
        }

        Ok(())
    }
}

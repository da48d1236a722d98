//! Preview command - show pending notifications without sending them
//!
//! Runs the same listing and delta computation as `run`, but delivers no
//! webhooks and leaves the seen set untouched. Useful for checking what a
//! real run would announce.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use crate::commands::{build_usecase, load_valid_config};
use crate::output::{get_formatter, OutputFormat};

#[derive(Debug, Args)]
pub struct PreviewCommand {}

impl PreviewCommand {
    pub async fn execute(&self, config_path: &Path, format: OutputFormat) -> Result<()> {
        let formatter = get_formatter(format);

        let config = load_valid_config(config_path, format)?;
        let (usecase, folders) = build_usecase(&config, false)?;

        let previews = usecase.preview(&folders).await?;

        if format.is_json() {
            let json =
                serde_json::to_value(&previews).context("Failed to serialize preview")?;
            formatter.print_json(&json);
            return Ok(());
        }

        let pending_total: usize = previews.iter().map(|p| p.pending.len()).sum();
        formatter.success(&format!("{pending_total} item(s) pending notification"));

        for preview in &previews {
            if preview.pending.is_empty() {
                continue;
            }
            formatter.info(&format!("{}:", preview.folder_name));
            for item in &preview.pending {
                let when = item
                    .created_at
                    .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| "unknown time".to_string());
                formatter.info(&format!("  {} {} ({when})", item.kind, item.name));
            }
        }

        Ok(())
    }
}

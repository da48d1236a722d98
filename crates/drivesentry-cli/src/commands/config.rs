//! Config command - View and validate DriveSentry configuration
//!
//! Provides the `drivesentry config` CLI command which:
//! 1. Shows the current configuration (YAML or JSON)
//! 2. Prints the configuration file path in use
//! 3. Validates the configuration file and reports errors

use std::path::Path;

use anyhow::{Context, Result};
use clap::Subcommand;
use tracing::info;

use drivesentry_core::config::Config;

use crate::output::{get_formatter, OutputFormat};

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Display current configuration
    Show,
    /// Print the configuration file path in use
    Path,
    /// Validate configuration file
    Validate,
}

impl ConfigCommand {
    /// Execute the config command
    pub async fn execute(&self, config_path: &Path, format: OutputFormat) -> Result<()> {
        match self {
            ConfigCommand::Show => self.execute_show(config_path, format).await,
            ConfigCommand::Path => self.execute_path(config_path, format).await,
            ConfigCommand::Validate => self.execute_validate(config_path, format).await,
        }
    }

    /// Show current configuration
    async fn execute_show(&self, config_path: &Path, format: OutputFormat) -> Result<()> {
        let formatter = get_formatter(format);
        let config = Config::load_or_default(config_path);

        info!(config_path = %config_path.display(), "Showing configuration");

        if format.is_json() {
            let json = serde_json::to_value(&config)
                .context("Failed to serialize configuration to JSON")?;
            formatter.print_json(&json);
        } else {
            formatter.success(&format!("Configuration ({})", config_path.display()));
            formatter.info("");

            let yaml = serde_yaml::to_string(&config)
                .context("Failed to serialize configuration to YAML")?;

            for line in yaml.lines() {
                formatter.info(line);
            }
        }

        Ok(())
    }

    /// Print the configuration file path
    async fn execute_path(&self, config_path: &Path, format: OutputFormat) -> Result<()> {
        let formatter = get_formatter(format);

        if format.is_json() {
            formatter.print_json(&serde_json::json!({
                "path": config_path.display().to_string(),
                "exists": config_path.exists(),
            }));
        } else {
            println!("{}", config_path.display());
        }

        Ok(())
    }

    /// Validate the configuration file
    async fn execute_validate(&self, config_path: &Path, format: OutputFormat) -> Result<()> {
        let formatter = get_formatter(format);

        let config = Config::load(config_path).with_context(|| {
            format!("Failed to load configuration from {}", config_path.display())
        })?;

        let errors = config.validate();

        if format.is_json() {
            let error_list: Vec<serde_json::Value> = errors
                .iter()
                .map(|e| serde_json::json!({"field": e.field, "message": e.message}))
                .collect();
            formatter.print_json(&serde_json::json!({
                "valid": errors.is_empty(),
                "errors": error_list,
            }));
        } else if errors.is_empty() {
            formatter.success("Configuration is valid");
        } else {
            for error in &errors {
                formatter.error(&error.to_string());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            anyhow::bail!("configuration is invalid ({} error(s))", errors.len())
        }
    }
}

//! Configuration module for DriveSentry.
//!
//! Provides typed configuration structs that map to the YAML configuration
//! file, with loading, validation, defaults, and a builder pattern for
//! programmatic use.
//!
//! A run cannot start without at least one watched folder: an empty
//! `watch.folder_ids` is a validation error, and validation errors are
//! fatal at startup before any processing is attempted.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, FolderId};

// ---------------------------------------------------------------------------
// Config struct with sub-sections
// ---------------------------------------------------------------------------

/// Top-level configuration for DriveSentry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub watch: WatchConfig,
    pub drive: DriveConfig,
    pub notify: NotifyConfig,
    pub state: StateConfig,
    pub logging: LoggingConfig,
}

/// Watched-folder settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    /// Identifiers of the remote folders to poll, processed in this order.
    pub folder_ids: Vec<String>,
}

/// Drive API access settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DriveConfig {
    /// OAuth2 access token for the Drive API. `None` until configured;
    /// the `DRIVESENTRY_ACCESS_TOKEN` environment variable overrides
    /// this value.
    pub access_token: Option<String>,
}

/// Notification delivery settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifyConfig {
    /// Discord webhook URL. `None` until configured; the
    /// `DISCORD_WEBHOOK_URL` environment variable overrides this value.
    pub webhook_url: Option<String>,
}

/// Seen-set persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StateConfig {
    /// Path of the JSON file recording already-notified item ids.
    pub seen_file: PathBuf,
}

/// Logging / tracing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: `trace`, `debug`, `info`, `warn`, or `error`.
    pub level: String,
}

// ---------------------------------------------------------------------------
// Loading and defaults
// ---------------------------------------------------------------------------

impl Config {
    /// Load configuration from a YAML file at `path`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from `path`, falling back to defaults when the
    /// file is missing or unreadable.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "using default configuration");
                Self::default()
            }
        }
    }

    /// Platform-appropriate default path for the configuration file.
    ///
    /// Typically `$XDG_CONFIG_HOME/drivesentry/config.yaml` on Linux.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("drivesentry")
            .join("config.yaml")
    }

    /// The configured folder ids as validated [`FolderId`] values.
    ///
    /// Returns [`DomainError::NoWatchedFolders`] when the list is empty —
    /// a run must not start without at least one folder.
    pub fn watched_folders(&self) -> Result<Vec<FolderId>, DomainError> {
        if self.watch.folder_ids.is_empty() {
            return Err(DomainError::NoWatchedFolders);
        }
        self.watch
            .folder_ids
            .iter()
            .map(|id| FolderId::new(id.clone()))
            .collect()
    }
}

impl Default for StateConfig {
    fn default() -> Self {
        let data_dir = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("~/.local/share"))
            .join("drivesentry");
        Self {
            seen_file: data_dir.join("notified.json"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// A single validation error found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path to the offending field, e.g. `"watch.folder_ids"`.
    pub field: String,
    /// Human-readable explanation.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Valid values for `logging.level`.
const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

impl Config {
    /// Validate the configuration and return all errors found.
    ///
    /// An empty vector means the configuration is valid.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        // --- watch ---
        if self.watch.folder_ids.is_empty() {
            errors.push(ValidationError {
                field: "watch.folder_ids".into(),
                message: "must list at least one folder id".into(),
            });
        }
        for (idx, id) in self.watch.folder_ids.iter().enumerate() {
            if id.trim().is_empty() {
                errors.push(ValidationError {
                    field: format!("watch.folder_ids[{idx}]"),
                    message: "folder id must not be empty".into(),
                });
            }
        }

        // --- notify ---
        // webhook_url may come from the environment instead, so only the
        // shape of an explicitly configured value is checked here.
        if let Some(url) = &self.notify.webhook_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                errors.push(ValidationError {
                    field: "notify.webhook_url".into(),
                    message: format!("must be an http(s) URL, got '{url}'"),
                });
            }
        }

        // --- state ---
        if self.state.seen_file.as_os_str().is_empty() {
            errors.push(ValidationError {
                field: "state.seen_file".into(),
                message: "must not be empty".into(),
            });
        }

        // --- logging ---
        if !VALID_LOG_LEVELS.contains(&self.logging.level.as_str()) {
            errors.push(ValidationError {
                field: "logging.level".into(),
                message: format!(
                    "invalid level '{}'; valid options: {}",
                    self.logging.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            });
        }

        errors
    }
}

// ---------------------------------------------------------------------------
// ConfigBuilder
// ---------------------------------------------------------------------------

/// Builder for constructing a [`Config`] programmatically.
///
/// Starts from [`Config::default`] and allows selective overrides.
///
/// # Example
///
/// ```rust,no_run
/// use drivesentry_core::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .watch_folder("1AbCfolderid")
///     .notify_webhook_url("https://discord.com/api/webhooks/1/abc")
///     .logging_level("debug")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder initialised with [`Config::default`] values.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Append a folder id to the watch list.
    pub fn watch_folder(mut self, id: impl Into<String>) -> Self {
        self.config.watch.folder_ids.push(id.into());
        self
    }

    pub fn drive_access_token(mut self, token: impl Into<String>) -> Self {
        self.config.drive.access_token = Some(token.into());
        self
    }

    pub fn notify_webhook_url(mut self, url: impl Into<String>) -> Self {
        self.config.notify.webhook_url = Some(url.into());
        self
    }

    pub fn state_seen_file(mut self, path: PathBuf) -> Self {
        self.config.state.seen_file = path;
        self
    }

    pub fn logging_level(mut self, level: impl Into<String>) -> Self {
        self.config.logging.level = level.into();
        self
    }

    /// Consume the builder and return the finished [`Config`].
    pub fn build(self) -> Config {
        self.config
    }

    /// Build and validate in one step. Returns `Err` with the list of
    /// validation errors if the configuration is invalid.
    pub fn build_validated(self) -> Result<Config, Vec<ValidationError>> {
        let config = self.build();
        let errors = config.validate();
        if errors.is_empty() {
            Ok(config)
        } else {
            Err(errors)
        }
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

//! DriveSentry Notify - Discord webhook notifier
//!
//! Delivers one Discord embed per newly discovered Drive item, with links
//! to view and download the item.
//!
//! ## Modules
//!
//! - [`webhook`] - Discord webhook client and embed construction

pub mod webhook;

pub use webhook::DiscordNotifier;

/// Environment variable holding the Discord webhook URL.
///
/// Overrides `notify.webhook_url` from the configuration file.
pub const WEBHOOK_URL_ENV: &str = "DISCORD_WEBHOOK_URL";

/// Resolves the webhook URL from the environment or configuration.
/// The environment variable wins when both are set.
pub fn resolve_webhook_url(configured: Option<&str>) -> anyhow::Result<String> {
    let env_value = std::env::var(WEBHOOK_URL_ENV).ok();
    match pick_url(env_value, configured) {
        Some(url) => Ok(url),
        None => anyhow::bail!(
            "no Discord webhook URL: set {WEBHOOK_URL_ENV} or configure notify.webhook_url"
        ),
    }
}

/// Chooses between an environment-provided and a configured URL.
/// Blank values are treated as absent.
fn pick_url(env_value: Option<String>, configured: Option<&str>) -> Option<String> {
    env_value
        .filter(|u| !u.trim().is_empty())
        .or_else(|| {
            configured
                .filter(|u| !u.trim().is_empty())
                .map(str::to_string)
        })
}

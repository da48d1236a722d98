//! Access token resolution
//!
//! DriveSentry does not run an OAuth2 flow itself; a valid access token is
//! supplied externally, either through the `DRIVESENTRY_ACCESS_TOKEN`
//! environment variable or through the configuration file. The environment
//! variable wins when both are set.

use anyhow::{bail, Result};

/// Environment variable holding the Drive access token.
pub const ACCESS_TOKEN_ENV: &str = "DRIVESENTRY_ACCESS_TOKEN";

/// Resolves the access token from the environment or configuration.
pub fn resolve_access_token(configured: Option<&str>) -> Result<String> {
    let env_value = std::env::var(ACCESS_TOKEN_ENV).ok();
    match pick_token(env_value, configured) {
        Some(token) => Ok(token),
        None => bail!(
            "no Drive access token: set {ACCESS_TOKEN_ENV} or configure drive.access_token"
        ),
    }
}

/// Chooses between an environment-provided and a configured token.
/// Blank values are treated as absent.
fn pick_token(env_value: Option<String>, configured: Option<&str>) -> Option<String> {
    env_value
        .filter(|t| !t.trim().is_empty())
        .or_else(|| {
            configured
                .filter(|t| !t.trim().is_empty())
                .map(str::to_string)
        })
}

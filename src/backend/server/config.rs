/**
 * Server Configuration
 *
 * Loads the renderer configuration from the environment for the demo
 * binary. Unlike library users, the demo falls back to a development
 * manifest version so it starts without any setup.
 */

use crate::shared::config::{ConfigError, InertiaConfig};

/// Manifest version used when `INERTIA_VERSION` is not set
pub const DEV_MANIFEST_VERSION: &str = "dev";

/// Load the renderer configuration
///
/// Reads `INERTIA_VERSION`, `INERTIA_SSR_URL`, `INERTIA_SSR_TIMEOUT_MS` and
/// `INERTIA_ENCRYPT_HISTORY`.
pub fn load_config() -> Result<InertiaConfig, ConfigError> {
    load_config_from(|key| std::env::var(key).ok())
}

/// Load the renderer configuration through an arbitrary key lookup
pub fn load_config_from<F>(lookup: F) -> Result<InertiaConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if lookup("INERTIA_VERSION").is_none() {
        tracing::warn!("INERTIA_VERSION not set, using '{}'", DEV_MANIFEST_VERSION);
    }

    let config = InertiaConfig::from_lookup(|key| match key {
        "INERTIA_VERSION" => lookup(key).or_else(|| Some(DEV_MANIFEST_VERSION.to_string())),
        _ => lookup(key),
    })?;

    match &config.ssr_url {
        Some(url) => tracing::info!("SSR enabled via {} (timeout {:?})", url, config.ssr_timeout),
        None => tracing::info!("SSR disabled, pages boot on the client"),
    }

    Ok(config)
}

//! Renderer configuration module
//!
//! Provides the configuration consumed by the renderer: the current asset
//! manifest version, the optional SSR sidecar and history encryption.

use std::time::Duration;
use thiserror::Error;

/// Default timeout for a single call to the SSR sidecar
pub const DEFAULT_SSR_TIMEOUT: Duration = Duration::from_secs(5);

/// Default number of idle prop stores kept for reuse
pub const DEFAULT_POOL_CAPACITY: usize = 64;

/// Renderer configuration
#[derive(Debug, Clone)]
pub struct InertiaConfig {
    /// Version of the frontend asset manifest
    pub manifest_version: String,
    /// Base URL of the SSR sidecar, `None` disables SSR
    pub ssr_url: Option<String>,
    /// Timeout for a single SSR call
    pub ssr_timeout: Duration,
    /// Default value of `encryptHistory` for every page
    pub encrypt_history: bool,
    /// Number of idle prop stores kept for reuse
    pub pool_capacity: usize,
}

impl InertiaConfig {
    /// Create a new InertiaConfigBuilder
    pub fn builder() -> InertiaConfigBuilder {
        InertiaConfigBuilder::default()
    }

    /// Load the configuration from environment variables
    ///
    /// - `INERTIA_VERSION` (required) - manifest version
    /// - `INERTIA_SSR_URL` - base URL of the SSR sidecar
    /// - `INERTIA_SSR_TIMEOUT_MS` - SSR timeout in milliseconds
    /// - `INERTIA_ENCRYPT_HISTORY` - `1` or `true` to encrypt history
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let version = lookup("INERTIA_VERSION").ok_or(ConfigError::MissingValue("INERTIA_VERSION"))?;
        let mut builder = Self::builder().manifest_version(version);

        if let Some(url) = lookup("INERTIA_SSR_URL").filter(|url| !url.is_empty()) {
            let timeout = match lookup("INERTIA_SSR_TIMEOUT_MS") {
                Some(raw) => {
                    let millis = raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                        key: "INERTIA_SSR_TIMEOUT_MS",
                        value: raw.clone(),
                    })?;
                    Duration::from_millis(millis)
                }
                None => DEFAULT_SSR_TIMEOUT,
            };
            builder = builder.ssr(url, timeout);
        }

        if let Some(raw) = lookup("INERTIA_ENCRYPT_HISTORY") {
            builder = builder.encrypt_history(matches!(raw.trim(), "1" | "true"));
        }

        builder.build()
    }

    /// Whether server-side rendering is configured
    pub fn ssr_enabled(&self) -> bool {
        self.ssr_url.is_some()
    }
}

/// Builder for InertiaConfig
#[derive(Debug, Default)]
pub struct InertiaConfigBuilder {
    manifest_version: Option<String>,
    ssr_url: Option<String>,
    ssr_timeout: Option<Duration>,
    encrypt_history: bool,
    pool_capacity: Option<usize>,
}

impl InertiaConfigBuilder {
    /// Set the manifest version
    pub fn manifest_version(mut self, version: impl Into<String>) -> Self {
        self.manifest_version = Some(version.into());
        self
    }

    /// Enable server-side rendering through the sidecar at `url`
    pub fn ssr(mut self, url: impl Into<String>, timeout: Duration) -> Self {
        self.ssr_url = Some(url.into());
        self.ssr_timeout = Some(timeout);
        self
    }

    /// Set the default history encryption flag
    pub fn encrypt_history(mut self, encrypt: bool) -> Self {
        self.encrypt_history = encrypt;
        self
    }

    /// Set how many idle prop stores are kept for reuse
    pub fn pool_capacity(mut self, capacity: usize) -> Self {
        self.pool_capacity = Some(capacity);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<InertiaConfig, ConfigError> {
        let manifest_version = self
            .manifest_version
            .ok_or(ConfigError::MissingValue("manifest_version"))?;

        if let Some(url) = &self.ssr_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidUrl(url.clone()));
            }
        }

        let ssr_timeout = self.ssr_timeout.unwrap_or(DEFAULT_SSR_TIMEOUT);
        if ssr_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                key: "ssr_timeout",
                value: "0".to_string(),
            });
        }

        Ok(InertiaConfig {
            manifest_version,
            ssr_url: self.ssr_url,
            ssr_timeout,
            encrypt_history: self.encrypt_history,
            pool_capacity: self.pool_capacity.unwrap_or(DEFAULT_POOL_CAPACITY),
        })
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

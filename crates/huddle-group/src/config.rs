//! Configuration for grouping and group naming.

use std::time::Duration;

use serde::Deserialize;

use crate::gemini::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use crate::namer::NamingStyle;

/// Default number of people per group.
pub const DEFAULT_GROUP_SIZE: usize = 4;

/// Default time to wait for the naming service.
pub const DEFAULT_NAMING_TIMEOUT_SECS: u64 = 15;

/// Configuration for a grouping engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GroupingConfig {
    /// Requested people per group. Clamped at partition time.
    pub group_size: usize,
    /// RNG seed for reproducible partitions. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Settings for the optional naming step.
    pub naming: NamingConfig,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            group_size: DEFAULT_GROUP_SIZE,
            seed: None,
            naming: NamingConfig::default(),
        }
    }
}

impl GroupingConfig {
    /// Set the requested group size.
    pub fn with_group_size(mut self, size: usize) -> Self {
        self.group_size = size;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the naming settings.
    pub fn with_naming(mut self, naming: NamingConfig) -> Self {
        self.naming = naming;
        self
    }
}

/// Settings for the naming service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Whether to ask for names at all.
    pub enabled: bool,
    /// API key for the naming service.
    pub api_key: Option<String>,
    /// Model identifier.
    pub model: String,
    /// Base URL of the API.
    pub endpoint: String,
    /// Seconds to wait before giving up.
    pub timeout_secs: u64,
    /// What kind of names to ask for.
    pub style: NamingStyle,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_NAMING_TIMEOUT_SECS,
            style: NamingStyle::default(),
        }
    }
}

impl NamingConfig {
    /// Set the API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Turn naming on or off.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the timeout in seconds.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// The timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

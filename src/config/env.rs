//! Environment variable configuration
//!
//! Provides environment variable overrides for the replay configuration.

use std::env;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "SPEC_REPORTER";

/// Values read from SPEC_REPORTER_* variables
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnvConfig {
    /// Event log path from SPEC_REPORTER_INPUT
    pub input: Option<String>,
    /// Log level from SPEC_REPORTER_LOG
    pub log_level: Option<String>,
}

impl EnvConfig {
    /// Load configuration from the process environment
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| {
            lookup(&format!("{ENV_PREFIX}_{name}")).filter(|v| !v.trim().is_empty())
        };

        Self {
            input: get("INPUT"),
            log_level: get("LOG"),
        }
    }
}

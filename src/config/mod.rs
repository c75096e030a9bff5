//! Configuration module
//!
//! Resolves replay settings from command-line values and the environment.
//! Command-line values win over environment variables.

mod env;

pub use env::{EnvConfig, ENV_PREFIX};

use std::path::PathBuf;

use crate::error::{ReporterError, Result};
use crate::utils::LogLevel;

/// Settings for replaying a recorded run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplayConfig {
    /// Event log to replay
    pub input: PathBuf,

    /// Diagnostic log level (stderr)
    pub log_level: LogLevel,
}

impl ReplayConfig {
    /// Merge explicit values with environment overrides
    pub fn resolve(
        input: Option<PathBuf>,
        log_level: Option<&str>,
        env: &EnvConfig,
    ) -> Result<Self> {
        let input = input
            .or_else(|| env.input.as_ref().map(PathBuf::from))
            .ok_or(ReporterError::MissingInput)?;

        let log_level = match log_level.or(env.log_level.as_deref()) {
            Some(level) => level.parse()?,
            None => LogLevel::default(),
        };

        Ok(Self { input, log_level })
    }
}

//! Error types
//!
//! The printer never fails; these cover loading recorded runs and setup.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReporterError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON event log: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML event log: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid event on line {line}: {source}")]
    JsonLine {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Test event #{0} has an empty title path")]
    EmptyTitlePath(usize),

    #[error("No event log given (pass a file or set SPEC_REPORTER_INPUT)")]
    MissingInput,

    #[error("Unknown log level: {0}")]
    UnknownLogLevel(String),
}

pub type Result<T> = std::result::Result<T, ReporterError>;

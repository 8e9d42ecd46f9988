//! Error types for the harness framework.

use crate::report::StageResults;
use stress_core::{ConnectivityError, Stage};
use stress_populate::PopulateError;
use thiserror::Error;

/// Errors loading or validating a harness configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error.
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML.
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A value is out of range.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Errors that end a harness run before a report is produced.
#[derive(Error, Debug)]
pub enum HarnessError {
    /// The store could not be reached.
    #[error(transparent)]
    Connectivity(#[from] ConnectivityError),

    /// Cancellation was requested; the run stopped before the given stage.
    ///
    /// `completed` holds what the earlier stages measured, including a load
    /// cut short between batches.
    #[error("Run cancelled before the {stage} stage")]
    Cancelled {
        stage: Stage,
        completed: Box<StageResults>,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The loader refused to start.
    #[error("Load error: {0}")]
    Populate(#[from] PopulateError),
}

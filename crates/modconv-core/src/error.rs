//! Error types for modconv

use std::path::PathBuf;
use thiserror::Error;

/// modconv error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Preprocess error: {0}")]
    Preprocess(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for modconv
pub type Result<T> = std::result::Result<T, Error>;

/// Errors found while loading or validating the converter config.
///
/// Every variant is fatal: the run stops before any file is touched.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("'{0}' is required")]
    MissingField(&'static str),

    #[error("'{field}' is a required field for modules")]
    MissingModuleField { field: &'static str },

    #[error(
        "invalid value '{0}' for 'mode'. Valid values are: 'header-wrapper', \
         'rewrite-headers-to-module-units', 'rewrite-headers-to-partitions'"
    )]
    InvalidMode(String),

    #[error("failed to parse boolean field '{field}' from '{value}'")]
    InvalidBool { field: String, value: String },

    #[error("the path {0} should be a relative path to the root dir")]
    AbsoluteModulePath(String),

    #[error("invalid header regex '{pattern}' for third party module '{module}': {message}")]
    InvalidRegex {
        module: String,
        pattern: String,
        message: String,
    },
}

//! # Audiotica Configuration Errors
//!
//! Errors raised while reading, parsing or writing the settings file.
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error during '{operation}' on path '{path}': {source}")]
    Io {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported configuration format for path: {path}")]
    UnsupportedFormat { path: PathBuf },

    #[error("Failed to deserialize settings from {format}: {message}")]
    Deserialization { format: String, message: String },

    #[error("Failed to serialize settings to {format}: {message}")]
    Serialization { format: String, message: String },

    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

impl ConfigError {
    pub fn io(source: std::io::Error, operation: impl Into<String>, path: PathBuf) -> Self {
        ConfigError::Io { path, operation: operation.into(), source }
    }
}

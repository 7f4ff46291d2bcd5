//! Error types for Talks Catalog
//!
//! This module defines all custom error types used throughout the crate.
//! Error types are organized by category for clear error handling and user-friendly messages.

use std::path::PathBuf;
use thiserror::Error;

/// Failures while fetching the talk collection.
///
/// Every variant is reported to the visitor the same way: one localized
/// error message in place of the results.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Data file does not exist
    #[error("Talk data not found: {0}")]
    NotFound(PathBuf),

    /// Error reading the data file
    #[error("Could not read talk data: {path}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Transport failure while fetching remote data
    #[error("Could not fetch talk data from {url}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Remote server answered with a non-success status
    #[error("Talk data request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    /// Body is not a JSON array of talks
    #[error("Invalid talk data: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Configuration related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Error loading configuration file
    #[error("Could not load configuration: {0}")]
    LoadError(String),

    /// Error saving configuration
    #[error("Could not save configuration: {0}")]
    SaveError(String),

    /// Error parsing configuration
    #[error("Invalid configuration format: {0}")]
    ParseError(String),

    /// Configuration directory error
    #[error("Could not access configuration directory")]
    DirectoryError,
}

/// Preference store errors
#[derive(Error, Debug)]
pub enum PreferenceError {
    /// Error writing the preference file
    #[error("Could not save preferences: {path}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error serializing preferences
    #[error("Could not encode preferences: {0}")]
    Encode(#[from] serde_json::Error),

    /// Configuration directory error
    #[error("Could not access preferences directory")]
    DirectoryError,
}

/// Legacy data migration errors
#[derive(Error, Debug)]
pub enum MigrationError {
    /// Could not read the input document
    #[error("Could not read {path}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Could not write the output document
    #[error("Could not write {path}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input is not a JSON array of objects
    #[error("Invalid legacy talk data: {0}")]
    Format(String),

    /// Malformed JSON
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for data loading
pub type LoadResult<T> = Result<T, LoadError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type alias for preference operations
pub type PreferenceResult<T> = Result<T, PreferenceError>;

impl LoadError {
    /// Create a user-friendly error message suitable for the terminal
    pub fn user_message(&self) -> String {
        match self {
            LoadError::NotFound(path) => {
                format!("No talk data at {}. Pass --data to point at talks.json.", path.display())
            }
            LoadError::Network { .. } | LoadError::Status { .. } => {
                "The talk data could not be downloaded. Check the URL and your connection."
                    .to_string()
            }
            LoadError::ParseError(_) => {
                "The talk data is not a valid JSON list of talks.".to_string()
            }
            _ => self.to_string(),
        }
    }
}

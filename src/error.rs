//! Unified error types for aws-env
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from the parameter store
    #[error("Parameter store error: {0}")]
    Store(#[from] StoreError),

    /// Error from configuration validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from the export pipeline
    #[error("Pipeline error: {0}")]
    Service(#[from] ServiceError),
}

/// Errors from parameter store operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Failed to set up the store client
    #[error("Failed to initialize parameter store client: {0}")]
    InitializationFailed(String),

    /// The request was rejected or could not be sent
    #[error("GetParametersByPath failed for '{path}': {message}")]
    RequestFailed { path: String, message: String },

    /// The store returned a parameter without a required field
    #[error("Parameter is missing its {0}")]
    MissingField(&'static str),
}

/// Errors from configuration validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Unsupported output format
    #[error("Unsupported format option '{0}'. Must be 'exports' or 'dotenv'")]
    UnsupportedFormat(String),

    /// Unsupported input format
    #[error("Unsupported input format option '{0}'. Must be 'parameter' or 'json'")]
    UnsupportedInputFormat(String),

    /// Invalid config value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Missing required config field
    #[error("Missing required configuration field: {0}")]
    MissingField(String),
}

/// Errors from the fetch-shape-print pipeline
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Store call failed
    #[error("Fetch failed: {0}")]
    Store(#[from] StoreError),

    /// The store kept returning continuation tokens
    #[error("Stopped after {pages} pages under '{path}': the store never signalled the last page")]
    PageLimitExceeded { path: String, pages: u32 },

    /// Writing a line failed
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

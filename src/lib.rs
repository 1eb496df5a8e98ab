//! aws-env - export AWS SSM parameters as environment variables
//!
//! This library lists parameters under a path in AWS Systems Manager
//! Parameter Store and renders them as shell `export` statements or dotenv
//! lines.
//!
//! # Modules
//!
//! - [`cli`]: Command-line interface definitions and line output
//! - [`commands`]: Command handlers
//! - [`config`]: Startup gate and configuration
//! - [`domain`]: Domain models
//! - [`error`]: Error types
//! - [`logging`]: Logger setup
//! - [`services`]: Fetching and shaping
//! - [`store`]: Parameter store abstraction layer

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod services;
pub mod store;

#[cfg(test)]
pub mod mock;

pub use error::{AppError, Result};

//! Domain models for aws-env
//!
//! This module contains the types flowing through the pipeline: parameters
//! and pages from the store, format selections, and the variables printed.

pub mod format;
pub mod parameter;
pub mod value;

pub use format::{InputFormat, OutputFormat};
pub use parameter::{Page, PageRequest, PaginationToken, Parameter};
pub use value::{EnvValue, EnvVar};

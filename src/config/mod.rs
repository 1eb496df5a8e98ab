//! Configuration system
//!
//! Merges the startup gate and CLI arguments into a validated Config.
//! There are no configuration files.

pub mod builder;
pub mod gate;

pub use builder::ConfigBuilder;
pub use gate::{Gate, ENV_PATH_VAR};

use crate::domain::{InputFormat, OutputFormat};
use crate::store::SsmStoreConfig;

/// Default bound on the number of pages fetched per run
pub const DEFAULT_MAX_PAGES: u32 = 1000;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path prefix to export
    pub path: String,
    /// Include parameters at all depths below the path
    pub recursive: bool,
    /// Shape of each printed line
    pub output_format: OutputFormat,
    /// How parameter values are interpreted
    pub input_format: InputFormat,
    /// Give up after this many pages
    pub max_pages: u32,
    /// AWS region override
    pub region: Option<String>,
    /// Custom SSM endpoint
    pub endpoint_url: Option<String>,
}

impl Config {
    /// Create a configuration for `path` with default settings
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            recursive: false,
            output_format: OutputFormat::default(),
            input_format: InputFormat::default(),
            max_pages: DEFAULT_MAX_PAGES,
            region: None,
            endpoint_url: None,
        }
    }

    /// Connection settings for the SSM store
    pub fn store_config(&self) -> SsmStoreConfig {
        SsmStoreConfig {
            region: self.region.clone(),
            endpoint_url: self.endpoint_url.clone(),
        }
    }
}

//! Configuration builder
//!
//! Merges the gate path and CLI arguments.

use crate::config::{Config, DEFAULT_MAX_PAGES};
use crate::domain::{InputFormat, OutputFormat};
use crate::error::ConfigError;

/// Builder for merging configuration sources
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    path: Option<String>,
    recursive: bool,
    output_format: OutputFormat,
    input_format: InputFormat,
    max_pages: Option<u32>,
    region: Option<String>,
    endpoint_url: Option<String>,
}

impl ConfigBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the path to export
    pub fn with_path(mut self, path: Option<&str>) -> Self {
        if let Some(p) = path {
            self.path = Some(p.to_string());
        }
        self
    }

    /// Override with CLI recursive flag
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Override with CLI output format
    pub fn with_output_format(mut self, format: Option<OutputFormat>) -> Self {
        if let Some(f) = format {
            self.output_format = f;
        }
        self
    }

    /// Override with CLI input format
    pub fn with_input_format(mut self, format: Option<InputFormat>) -> Self {
        if let Some(f) = format {
            self.input_format = f;
        }
        self
    }

    /// Override with CLI page bound
    pub fn with_max_pages(mut self, max_pages: Option<u32>) -> Self {
        if let Some(m) = max_pages {
            self.max_pages = Some(m);
        }
        self
    }

    /// Override with CLI region
    pub fn with_region(mut self, region: Option<String>) -> Self {
        if let Some(r) = region {
            self.region = Some(r);
        }
        self
    }

    /// Override with CLI endpoint
    pub fn with_endpoint_url(mut self, endpoint_url: Option<String>) -> Self {
        if let Some(e) = endpoint_url {
            self.endpoint_url = Some(e);
        }
        self
    }

    /// Validate and build the final configuration
    pub fn build(self) -> Result<Config, ConfigError> {
        let path = self
            .path
            .filter(|p| !p.is_empty())
            .ok_or_else(|| ConfigError::MissingField("path".to_string()))?;

        let max_pages = self.max_pages.unwrap_or(DEFAULT_MAX_PAGES);
        if max_pages == 0 {
            return Err(ConfigError::InvalidValue {
                key: "max_pages".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        Ok(Config {
            path,
            recursive: self.recursive,
            output_format: self.output_format,
            input_format: self.input_format,
            max_pages,
            region: self.region.filter(|r| !r.is_empty()),
            endpoint_url: self.endpoint_url.filter(|e| !e.is_empty()),
        })
    }
}

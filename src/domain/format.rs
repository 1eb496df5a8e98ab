//! Input and output format selection
//!
//! Provides the OutputFormat and InputFormat enums parsed from the CLI.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Textual shape of each emitted line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// `export NAME='VALUE'`
    #[default]
    Exports,
    /// `NAME="VALUE"`
    Dotenv,
}

impl OutputFormat {
    /// Name as accepted on the command line
    pub const fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Exports => "exports",
            OutputFormat::Dotenv => "dotenv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exports" => Ok(OutputFormat::Exports),
            "dotenv" => Ok(OutputFormat::Dotenv),
            other => Err(ConfigError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// How parameter values are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputFormat {
    /// One variable per parameter, named after its path
    #[default]
    Parameter,
    /// Each value is a JSON object; one variable per top-level key
    Json,
}

impl InputFormat {
    /// Name as accepted on the command line
    pub const fn as_str(&self) -> &'static str {
        match self {
            InputFormat::Parameter => "parameter",
            InputFormat::Json => "json",
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "parameter" => Ok(InputFormat::Parameter),
            "json" => Ok(InputFormat::Json),
            other => Err(ConfigError::UnsupportedInputFormat(other.to_string())),
        }
    }
}

//! CLI argument definitions using clap derive
//!
//! Defines all command-line arguments. The Go-flag style single-dash spellings
//! (`-recursive`, `-format`, `-formatInput`) are rewritten to their
//! double-dash form before parsing.

use crate::config::{Config, ConfigBuilder, DEFAULT_MAX_PAGES};
use crate::domain::{InputFormat, OutputFormat};
use crate::error::ConfigError;

use clap::{ArgAction, Parser};
use std::ffi::OsString;

/// Long flags that are also accepted with a single leading dash
const SINGLE_DASH_FLAGS: &[&str] = &["recursive", "format", "formatInput"];

/// Export AWS SSM parameters as environment variables
///
/// Lists the parameters under the path in AWS_ENV_PATH and prints them as
/// shell exports or dotenv lines. Does nothing when AWS_ENV_PATH is unset.
#[derive(Parser, Debug)]
#[command(name = "aws-env")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Recursively process parameters on path
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub recursive: bool,

    /// Output format (exports or dotenv)
    #[arg(long, value_name = "FORMAT", default_value = "exports")]
    pub format: OutputFormat,

    /// Input format (parameter or json)
    #[arg(
        long = "formatInput",
        alias = "format-input",
        value_name = "FORMAT",
        default_value = "parameter"
    )]
    pub format_input: InputFormat,

    /// Maximum number of pages to fetch before giving up
    #[arg(
        long,
        env = "AWS_ENV_MAX_PAGES",
        default_value_t = DEFAULT_MAX_PAGES,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_pages: u32,

    /// AWS region (defaults to the SDK provider chain)
    #[arg(long)]
    pub region: Option<String>,

    /// Custom SSM endpoint URL
    #[arg(long)]
    pub endpoint_url: Option<String>,
}

impl Cli {
    /// Merge the arguments with the gate path
    pub fn to_config(&self, path: &str) -> Result<Config, ConfigError> {
        ConfigBuilder::new()
            .with_path(Some(path))
            .with_recursive(self.recursive)
            .with_output_format(Some(self.format))
            .with_input_format(Some(self.format_input))
            .with_max_pages(Some(self.max_pages))
            .with_region(self.region.clone())
            .with_endpoint_url(self.endpoint_url.clone())
            .build()
    }
}

/// Rewrite `-flag` and `-flag=value` to `--flag` for the known long flags
///
/// Everything after a bare `--` is left untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut seen_terminator = false;

    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if seen_terminator {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                seen_terminator = true;
                return arg;
            }
            match text.strip_prefix('-') {
                Some(rest) if !rest.starts_with('-') => {
                    let flag = rest.split('=').next().unwrap_or(rest);
                    if SINGLE_DASH_FLAGS.contains(&flag) {
                        OsString::from(format!("-{}", text))
                    } else {
                        arg
                    }
                }
                _ => arg,
            }
        })
        .collect()
}

//! Startup decision
//!
//! Checks the gate before the arguments are validated: without AWS_ENV_PATH
//! the tool exits successfully whatever flags it was given. Only an explicit
//! help or version request is still answered.

use crate::cli::args::{normalize_args, Cli};
use crate::config::Gate;

use clap::Parser;
use std::ffi::OsString;

/// Flags answered even when the gate is closed
const INFO_FLAGS: &[&str] = &["-h", "--help", "-V", "--version"];

/// What the binary should do
#[derive(Debug)]
pub enum Startup {
    /// Not configured: exit 0 without output
    Skip,
    /// Export parameters under `path`
    Run { cli: Cli, path: String },
}

impl Startup {
    /// Check if debug logging was requested
    pub fn verbose(&self) -> bool {
        matches!(self, Startup::Run { cli, .. } if cli.verbose)
    }
}

/// Decide from raw arguments and a variable lookup
///
/// Returns the clap error (usage error, help or version output) when the
/// arguments are parsed and do not describe a run.
pub fn startup<I, T, F>(args: I, lookup: F) -> Result<Startup, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    F: FnOnce(&str) -> Option<String>,
{
    let args = normalize_args(args);

    let path = match Gate::from_lookup(lookup) {
        Gate::Run { path } => path,
        Gate::Skip => {
            if wants_info(&args) {
                Cli::try_parse_from(&args)?;
            }
            return Ok(Startup::Skip);
        }
    };

    let cli = Cli::try_parse_from(&args)?;
    Ok(Startup::Run { cli, path })
}

fn wants_info(args: &[OsString]) -> bool {
    args.iter()
        .skip(1)
        .take_while(|arg| *arg != "--")
        .any(|arg| INFO_FLAGS.iter().any(|flag| arg == flag))
}

//! Logging setup
//!
//! Logs go to stderr through env_logger so stdout carries only variables.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Filter applied when RUST_LOG is unset
pub const DEFAULT_FILTER: &str = "warn";

/// Build the logger configuration
///
/// `verbose` lowers the filter to debug for every module, overriding the
/// default; it must be applied on the builder since env_logger filters
/// records itself regardless of `log::max_level`.
pub fn builder(env: Env<'_>, verbose: bool) -> Builder {
    let mut builder = Builder::from_env(env);
    builder.format_timestamp(None);

    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }

    builder
}

/// Install the global logger
pub fn init(verbose: bool) {
    builder(Env::default().default_filter_or(DEFAULT_FILTER), verbose).init();
}

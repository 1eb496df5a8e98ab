//! CLI argument parsing and output formatting
//!
//! Uses clap for ergonomic CLI argument definitions.

pub mod args;
pub mod output;
pub mod startup;

pub use args::Cli;
pub use output::Printer;
pub use startup::{startup, Startup};

//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command.

pub mod export;

pub use export::{export, run_export, ExportSummary};

//! Export command implementation
//!
//! Fetches every parameter under the configured path and prints it as an
//! environment variable. Each page is printed as soon as it arrives.

use crate::cli::output::Printer;
use crate::config::Config;
use crate::error::{Result, ServiceError};
use crate::services::{Fetcher, Shaper};
use crate::store::{ParameterStore, SsmStore};

use std::io::{self, Write};

/// Counters for one export run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Pages fetched from the store
    pub pages: u32,
    /// Parameters received
    pub parameters: usize,
    /// Lines written
    pub variables: usize,
}

/// Execute the export command against AWS SSM
pub fn run_export(config: &Config) -> Result<()> {
    let store = SsmStore::new(&config.store_config())?;
    let stdout = io::stdout();

    let summary = export(config, &store, stdout.lock())?;
    log::debug!(
        "Exported {} variables from {} parameters in {} pages",
        summary.variables,
        summary.parameters,
        summary.pages
    );

    Ok(())
}

/// Run the fetch, shape and print pipeline against any store
///
/// Lines already written stay written if a later page fails.
pub fn export<S, W>(
    config: &Config,
    store: &S,
    out: W,
) -> std::result::Result<ExportSummary, ServiceError>
where
    S: ParameterStore,
    W: Write,
{
    let fetcher = Fetcher::new(config.path.clone(), config.recursive, config.max_pages);
    let shaper = Shaper::new(config.path.clone(), config.input_format);
    let mut printer = Printer::new(config.output_format, out);
    let mut summary = ExportSummary::default();

    for page in fetcher.pages(store) {
        let page = page?;
        summary.pages += 1;
        summary.parameters += page.parameters.len();

        for parameter in &page.parameters {
            for var in shaper.shape(parameter) {
                printer.print(&var)?;
            }
        }
        printer.flush()?;
    }

    summary.variables = printer.lines();
    Ok(summary)
}

//! Output formatting utilities
//!
//! Renders variables as shell `export` statements or dotenv lines.
//!
//! Quote characters inside values are not escaped: a value containing `'`
//! (exports) or `"` (dotenv) produces a line the shell cannot parse.

use crate::domain::{EnvValue, EnvVar, OutputFormat};
use std::io::{self, Write};

/// Render one line, without the trailing newline
pub fn format_line(format: OutputFormat, name: &str, value: &EnvValue) -> String {
    match format {
        OutputFormat::Exports => format!("export {}='{}'", name, value),
        OutputFormat::Dotenv => format!("{}=\"{}\"", name, value),
    }
}

/// Line writer for a fixed output format
pub struct Printer<W: Write> {
    format: OutputFormat,
    out: W,
    lines: usize,
}

impl<W: Write> Printer<W> {
    /// Create a printer writing to `out`
    pub fn new(format: OutputFormat, out: W) -> Self {
        Self {
            format,
            out,
            lines: 0,
        }
    }

    /// Write one variable as exactly one line
    pub fn print(&mut self, var: &EnvVar) -> io::Result<()> {
        writeln!(self.out, "{}", format_line(self.format, &var.name, &var.value))?;
        self.lines += 1;
        Ok(())
    }

    /// Flush the underlying writer
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Number of lines written
    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Consume the printer, returning the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

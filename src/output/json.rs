//! JSON results file
//!
//! Writes the page records as a pretty-printed JSON array with 4-space
//! indentation and echoes the file back to standard output.

use crate::output::traits::{OutputError, OutputHandler, OutputResult, PageRecord};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Renders page records as a JSON array indented with four spaces
///
/// Non-ASCII text is written as UTF-8, not escaped.
pub fn render_json(pages: &[PageRecord]) -> OutputResult<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    pages.serialize(&mut serializer)?;

    // serde_json only ever emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Result sink writing a JSON file and optionally echoing it to stdout
#[derive(Debug, Clone)]
pub struct JsonOutputHandler {
    path: PathBuf,
    echo: bool,
}

impl JsonOutputHandler {
    /// Creates a handler for the results file at `path`
    pub fn new(path: impl Into<PathBuf>, echo: bool) -> Self {
        Self {
            path: path.into(),
            echo,
        }
    }

    /// The results file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the results file back as written
    pub fn read_back(&self) -> OutputResult<String> {
        std::fs::read_to_string(&self.path).map_err(|source| self.io_error(source))
    }

    /// Prints the results file verbatim to `out`, followed by a newline
    pub fn publish_to(&self, out: &mut impl Write) -> OutputResult<()> {
        let contents = self.read_back()?;
        writeln!(out, "{}", contents)
            .and_then(|_| out.flush())
            .map_err(|source| OutputError::Io {
                path: "<stdout>".to_string(),
                source,
            })
    }

    fn io_error(&self, source: std::io::Error) -> OutputError {
        OutputError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl OutputHandler for JsonOutputHandler {
    fn write_results(&self, pages: &[PageRecord]) -> OutputResult<()> {
        let json = render_json(pages)?;
        std::fs::write(&self.path, json).map_err(|source| self.io_error(source))?;
        tracing::info!("Wrote {} page records to {}", pages.len(), self.path.display());
        Ok(())
    }

    fn publish(&self) -> OutputResult<()> {
        if !self.echo {
            return Ok(());
        }

        self.publish_to(&mut std::io::stdout().lock())
    }
}

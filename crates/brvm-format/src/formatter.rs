//! Output format abstraction.

use serde::Serialize;
use std::io::Write;
use thiserror::Error;

/// Snapshot file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnapshotFormat {
    /// JSON document, stored in the raw area.
    Json,
    /// Delimited table, stored in the processed area.
    Csv,
}

impl SnapshotFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

impl std::fmt::Display for SnapshotFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialization error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Trait for formatters writing a sequence of records.
pub trait Formatter: Send + Sync {
    /// Writes records to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    fn write_records<T: Serialize, W: Write>(
        &self,
        records: &[T],
        writer: W,
    ) -> Result<(), FormatError>;

    /// Returns the format this formatter produces.
    fn format(&self) -> SnapshotFormat;

    /// Returns the file extension for this format.
    fn extension(&self) -> &str {
        self.format().extension()
    }
}

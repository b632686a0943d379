//! Error types for snapshot storage.

use brvm_format::FormatError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing or resolving snapshots.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// Failed to create a directory.
    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        /// The path that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to read a directory.
    #[error("Failed to read directory '{path}': {source}")]
    ReadDir {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to write a file.
    #[error("Failed to write file '{path}': {source}")]
    WriteFile {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse a JSON snapshot.
    #[error("Failed to parse snapshot '{path}': {source}")]
    ParseJson {
        /// The path that could not be parsed.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// Failed to parse a CSV snapshot.
    #[error("Failed to parse snapshot '{path}': {source}")]
    ParseCsv {
        /// The path that could not be parsed.
        path: PathBuf,
        /// The underlying CSV error.
        source: csv::Error,
    },

    /// Failed to serialize a snapshot.
    #[error("Failed to serialize snapshot '{path}': {source}")]
    Format {
        /// The destination path.
        path: PathBuf,
        /// The underlying formatter error.
        source: FormatError,
    },
}

/// Result type for snapshot operations.
pub type Result<T> = std::result::Result<T, SnapshotError>;

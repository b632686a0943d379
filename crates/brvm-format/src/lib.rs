//! Snapshot file formats for the BRVM snapshot pipeline.
//!
//! - [`JsonFormatter`] - Pretty-printed JSON documents for the raw area
//! - [`CsvFormatter`] - Delimited tables with a header row for the processed area

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;

pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, SnapshotFormat};
pub use json::JsonFormatter;

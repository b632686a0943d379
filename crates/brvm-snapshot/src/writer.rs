//! Snapshot writer.

use crate::{Result, SnapshotError, SnapshotLayout};
use brvm_format::{CsvFormatter, FormatError, Formatter, JsonFormatter, SnapshotFormat};
use brvm_types::EntityData;
use chrono::NaiveDate;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{Span, debug};

/// Paths written for one entity value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Written {
    /// Raw document.
    pub raw: PathBuf,
    /// Processed table, if the entity has one.
    pub processed: Option<PathBuf>,
}

/// Persists entity values as dated snapshot files.
///
/// Every file is written to a temporary sibling, synced, then renamed over
/// the target, so readers observe either the old or the new complete file.
#[derive(Debug, Clone)]
pub struct SnapshotWriter {
    layout: SnapshotLayout,
    json: JsonFormatter,
    csv: CsvFormatter,
    span: Span,
}

impl SnapshotWriter {
    /// Creates a writer over the given layout.
    #[must_use]
    pub fn new(layout: SnapshotLayout) -> Self {
        Self {
            layout,
            json: JsonFormatter::new().with_pretty(true),
            csv: CsvFormatter::new(),
            span: Span::none(),
        }
    }

    /// Sets the logging context.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Returns the layout.
    #[must_use]
    pub const fn layout(&self) -> &SnapshotLayout {
        &self.layout
    }

    /// Writes both the raw document and the processed table of `data`.
    ///
    /// # Errors
    ///
    /// Returns the first write error.
    pub fn write(&self, data: &EntityData, date: NaiveDate) -> Result<Written> {
        Ok(Written {
            raw: self.write_raw(data, date)?,
            processed: self.write_processed(data, date)?,
        })
    }

    /// Writes the raw JSON document of `data`.
    ///
    /// Market status and indices are written as one object, list entities as
    /// an array of records in page order.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any filesystem step fails.
    pub fn write_raw(&self, data: &EntityData, date: NaiveDate) -> Result<PathBuf> {
        let path = self.layout.path_for(data.kind(), date, SnapshotFormat::Json);
        let json = &self.json;
        match data {
            EntityData::MarketStatus(status) => {
                self.replace(&path, |w| json.write_document(status, w))
            }
            EntityData::Indices(board) => self.replace(&path, |w| json.write_document(board, w)),
            EntityData::Stocks(quotes) => {
                self.replace(&path, |w| json.write_records(quotes.as_slice(), w))
            }
            EntityData::Bonds(quotes) => {
                self.replace(&path, |w| json.write_records(quotes.as_slice(), w))
            }
            EntityData::News(items) => {
                self.replace(&path, |w| json.write_records(items.as_slice(), w))
            }
        }
    }

    /// Writes the processed CSV table of `data`, stamped with `date`.
    ///
    /// Returns `None` for entities without a table (market status, news).
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any filesystem step fails.
    pub fn write_processed(&self, data: &EntityData, date: NaiveDate) -> Result<Option<PathBuf>> {
        let path = self.layout.path_for(data.kind(), date, SnapshotFormat::Csv);
        let csv = &self.csv;
        let written = match data {
            EntityData::Indices(board) => {
                let rows = board.rows(date);
                self.replace(&path, |w| csv.write_records(rows.as_slice(), w))?
            }
            EntityData::Stocks(quotes) => {
                self.replace(&path, |w| csv.write_records(quotes.as_slice(), w))?
            }
            EntityData::Bonds(quotes) => {
                self.replace(&path, |w| csv.write_records(quotes.as_slice(), w))?
            }
            EntityData::MarketStatus(_) | EntityData::News(_) => return Ok(None),
        };
        Ok(Some(written))
    }

    /// Atomically replaces `path` with the output of `render`.
    fn replace<F>(&self, path: &Path, render: F) -> Result<PathBuf>
    where
        F: FnOnce(&mut BufWriter<&mut File>) -> std::result::Result<(), FormatError>,
    {
        let _guard = self.span.enter();
        let write_err = |source| SnapshotError::WriteFile {
            path: path.to_path_buf(),
            source,
        };

        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir).map_err(|e| SnapshotError::CreateDir {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let mut temp = NamedTempFile::new_in(dir).map_err(write_err)?;
        {
            let mut buffered = BufWriter::new(temp.as_file_mut());
            render(&mut buffered).map_err(|e| SnapshotError::Format {
                path: path.to_path_buf(),
                source: e,
            })?;
            buffered.flush().map_err(write_err)?;
        }
        temp.as_file().sync_all().map_err(write_err)?;
        temp.persist(path).map_err(|e| write_err(e.error))?;

        debug!(path = %path.display(), "wrote snapshot");
        Ok(path.to_path_buf())
    }
}

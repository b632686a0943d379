//! CSV output format.

use serde::Serialize;
use std::io::Write;

use crate::{FormatError, Formatter, SnapshotFormat};

/// CSV formatter.
///
/// Column names come from the record's serialized field names. `None`
/// fields are written as empty cells.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: u8,
    /// Whether to include header row.
    include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: b',',
            include_header: true,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }
}

impl Formatter for CsvFormatter {
    fn write_records<T: Serialize, W: Write>(
        &self,
        records: &[T],
        writer: W,
    ) -> Result<(), FormatError> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(self.include_header)
            .from_writer(writer);

        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn format(&self) -> SnapshotFormat {
        SnapshotFormat::Csv
    }
}

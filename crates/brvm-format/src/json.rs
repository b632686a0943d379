//! JSON output format.

use serde::Serialize;
use std::io::Write;

use crate::{FormatError, Formatter, SnapshotFormat};

/// JSON formatter.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Whether to pretty-print with two-space indentation.
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new compact JSON formatter.
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: false }
    }

    /// Sets whether to pretty-print output.
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Writes any serializable value as a single document, followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_document<T: Serialize + ?Sized, W: Write>(
        &self,
        value: &T,
        mut writer: W,
    ) -> Result<(), FormatError> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, value)?;
        } else {
            serde_json::to_writer(&mut writer, value)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}

impl Formatter for JsonFormatter {
    fn write_records<T: Serialize, W: Write>(
        &self,
        records: &[T],
        writer: W,
    ) -> Result<(), FormatError> {
        self.write_document(records, writer)
    }

    fn format(&self) -> SnapshotFormat {
        SnapshotFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brvm_types::{MarketState, MarketStatus, NewsItem};
    use std::io::Cursor;

    #[test]
    fn test_compact_document() {
        let status = MarketStatus::new(MarketState::Open, "10:45".to_string());
        let mut output = Cursor::new(Vec::new());

        JsonFormatter::new().write_document(&status, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert_eq!(
            result,
            "{\"market_status\":\"open\",\"last_update\":\"10:45\"}\n"
        );
    }

    #[test]
    fn test_pretty_records() {
        let news = vec![NewsItem {
            title: "Dividende".to_string(),
            date: "2026-10-19".to_string(),
            content: String::new(),
            source: "BRVM".to_string(),
        }];
        let mut output = Cursor::new(Vec::new());

        JsonFormatter::new()
            .with_pretty(true)
            .write_records(&news, &mut output)
            .unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.starts_with("[\n  {\n    \"title\": \"Dividende\""));
        assert!(result.ends_with("]\n"));
    }

    #[test]
    fn test_extension() {
        assert_eq!(JsonFormatter::new().extension(), "json");
    }
}

//! Indices page.

use crate::html::table_rows;
use crate::number::parse_float;
use crate::{PageLayout, ParseError};
use brvm_types::{IndexBoard, IndexQuote};
use scraper::Html;
use tracing::{debug, trace};

/// Minimum number of cells for an index row: name, value, change.
pub const INDEX_MIN_CELLS: usize = 3;

/// Extracts index levels from the indices page.
///
/// Rows shorter than [`INDEX_MIN_CELLS`] or without a name are skipped.
/// Unparseable figures become `None`.
///
/// # Errors
///
/// Returns an error if the indices table is absent or a selector is invalid.
pub fn parse_indices(html: &str, layout: &PageLayout) -> Result<IndexBoard, ParseError> {
    let document = Html::parse_document(html);
    let rows = table_rows(&document, layout, &layout.indices_table)?;

    let mut board = IndexBoard::new();
    for cells in rows {
        if cells.len() < INDEX_MIN_CELLS || cells[0].is_empty() {
            trace!(cells = cells.len(), "skipping index row");
            continue;
        }
        board.insert(IndexQuote::new(
            cells[0].clone(),
            parse_float(&cells[1]),
            parse_float(&cells[2]),
        ));
    }

    debug!(indices = board.len(), "parsed indices");
    Ok(board)
}

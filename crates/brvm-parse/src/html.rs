//! Shared HTML helpers.

use crate::{PageLayout, ParseError};
use scraper::{ElementRef, Html, Selector};

/// Compiles a CSS selector.
pub(crate) fn selector(css: &str) -> Result<Selector, ParseError> {
    Selector::parse(css).map_err(|e| ParseError::InvalidSelector {
        selector: css.to_string(),
        reason: e.to_string(),
    })
}

/// Returns the trimmed text content of an element.
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Returns `Some(text)` unless the text is empty.
pub(crate) fn non_empty(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}

/// Extracts the cell texts of every data row of the first table matching `table_css`.
///
/// # Errors
///
/// Returns [`ParseError::MissingAnchor`] if no table matches.
pub(crate) fn table_rows(
    document: &Html,
    layout: &PageLayout,
    table_css: &str,
) -> Result<Vec<Vec<String>>, ParseError> {
    let table_selector = selector(table_css)?;
    let row_selector = selector(&layout.row)?;
    let cell_selector = selector(&layout.cell)?;

    let table = document
        .select(&table_selector)
        .next()
        .ok_or_else(|| ParseError::MissingAnchor {
            selector: table_css.to_string(),
        })?;

    Ok(table
        .select(&row_selector)
        .map(|row| row.select(&cell_selector).map(element_text).collect())
        .collect())
}

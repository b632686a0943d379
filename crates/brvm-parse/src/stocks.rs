//! Equities price list page.

use crate::html::{non_empty, table_rows};
use crate::number::{parse_float, parse_int};
use crate::{PageLayout, ParseError};
use brvm_types::StockQuote;
use chrono::NaiveDate;
use scraper::Html;
use tracing::{debug, trace};

/// Minimum number of cells for an equity row.
///
/// Symbol, name, ISIN, last price, change, high and low. Volume is read from
/// an optional eighth cell.
pub const STOCK_MIN_CELLS: usize = 7;

/// Extracts the equities price list, stamping every row with `date`.
///
/// # Errors
///
/// Returns an error if the equities table is absent or a selector is invalid.
pub fn parse_stocks(
    html: &str,
    layout: &PageLayout,
    date: NaiveDate,
) -> Result<Vec<StockQuote>, ParseError> {
    let document = Html::parse_document(html);
    let rows = table_rows(&document, layout, &layout.stocks_table)?;

    let quotes: Vec<StockQuote> = rows
        .into_iter()
        .filter(|cells| {
            let keep = cells.len() >= STOCK_MIN_CELLS;
            if !keep {
                trace!(cells = cells.len(), "skipping short equity row");
            }
            keep
        })
        .map(|cells| StockQuote {
            symbol: cells[0].clone(),
            name: cells[1].clone(),
            isin: non_empty(&cells[2]),
            last_price: parse_float(&cells[3]),
            change: parse_float(&cells[4]),
            high: parse_float(&cells[5]),
            low: parse_float(&cells[6]),
            volume: cells.get(7).and_then(|v| parse_int(v)),
            date,
        })
        .collect();

    debug!(stocks = quotes.len(), "parsed equities");
    Ok(quotes)
}

//! Bonds price list page.

use crate::html::{non_empty, table_rows};
use crate::number::parse_float;
use crate::{PageLayout, ParseError};
use brvm_types::BondQuote;
use chrono::NaiveDate;
use scraper::Html;
use tracing::{debug, trace};

/// Minimum number of cells for a bond row: symbol, name, ISIN, price, change, yield.
pub const BOND_MIN_CELLS: usize = 6;

/// Extracts the bonds price list, stamping every row with `date`.
///
/// The maturity date is kept verbatim from an optional seventh cell.
///
/// # Errors
///
/// Returns an error if the bonds table is absent or a selector is invalid.
pub fn parse_bonds(
    html: &str,
    layout: &PageLayout,
    date: NaiveDate,
) -> Result<Vec<BondQuote>, ParseError> {
    let document = Html::parse_document(html);
    let rows = table_rows(&document, layout, &layout.bonds_table)?;

    let mut quotes = Vec::with_capacity(rows.len());
    for cells in rows {
        if cells.len() < BOND_MIN_CELLS {
            trace!(cells = cells.len(), "skipping short bond row");
            continue;
        }
        quotes.push(BondQuote {
            symbol: cells[0].clone(),
            name: cells[1].clone(),
            isin: non_empty(&cells[2]),
            last_price: parse_float(&cells[3]),
            change: parse_float(&cells[4]),
            yield_rate: parse_float(&cells[5]),
            maturity_date: cells.get(6).and_then(|m| non_empty(m)),
            date,
        });
    }

    debug!(bonds = quotes.len(), "parsed bonds");
    Ok(quotes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn page(rows: &str) -> String {
        format!(r#"<table class="bonds-table"><tbody>{rows}</tbody></table>"#)
    }

    #[test]
    fn test_bond_with_maturity() {
        let html = page(
            "<tr><td>TPCI.O27</td><td>TPCI 6,5% 2017-2027</td><td>CI0000001234</td>\
             <td>10 000</td><td>0,00</td><td>6,50%</td><td>15/06/2027</td></tr>",
        );
        let quotes = parse_bonds(&html, &PageLayout::default(), date()).unwrap();

        assert_eq!(quotes.len(), 1);
        let q = &quotes[0];
        assert_eq!(q.symbol, "TPCI.O27");
        assert_relative_eq!(q.last_price.unwrap(), 10000.0);
        assert_relative_eq!(q.yield_rate.unwrap(), 6.5);
        assert_eq!(q.maturity_date.as_deref(), Some("15/06/2027"));
    }

    #[test]
    fn test_six_columns_without_maturity() {
        let html = page(
            "<tr><td>EOS.O25</td><td>EOS 2025</td><td></td><td>n/a</td><td>0</td><td>5,75</td></tr>\
             <tr><td>SHORT</td><td>row</td></tr>",
        );
        let quotes = parse_bonds(&html, &PageLayout::default(), date()).unwrap();

        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].isin, None);
        assert_eq!(quotes[0].last_price, None);
        assert_eq!(quotes[0].maturity_date, None);
    }

    #[test]
    fn test_missing_table() {
        let result = parse_bonds("", &PageLayout::default(), date());
        assert!(matches!(result, Err(ParseError::MissingAnchor { .. })));
    }
}

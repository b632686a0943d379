//! Price list records for indices, equities and bonds.

use chrono::NaiveDate;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Level of a single market index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexQuote {
    /// Index name (e.g., "BRVM Composite"), unique within a run.
    pub name: String,
    /// Index level.
    pub value: Option<f64>,
    /// Change since previous session, in percent.
    pub change_percent: Option<f64>,
}

impl IndexQuote {
    /// Creates a new index quote.
    #[must_use]
    pub const fn new(name: String, value: Option<f64>, change_percent: Option<f64>) -> Self {
        Self {
            name,
            value,
            change_percent,
        }
    }
}

/// Index levels of one run, keyed by index name.
///
/// Names are unique: inserting an existing name replaces the earlier quote in
/// place. Iteration follows page order. Serializes as a JSON object mapping
/// each name to `{value, change_percent}`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IndexBoard {
    quotes: Vec<IndexQuote>,
}

impl IndexBoard {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self { quotes: Vec::new() }
    }

    /// Inserts a quote, replacing any quote with the same name.
    pub fn insert(&mut self, quote: IndexQuote) {
        match self.quotes.iter_mut().find(|q| q.name == quote.name) {
            Some(existing) => *existing = quote,
            None => self.quotes.push(quote),
        }
    }

    /// Returns the quote for the given index name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&IndexQuote> {
        self.quotes.iter().find(|q| q.name == name)
    }

    /// Returns an iterator over quotes in page order.
    pub fn iter(&self) -> impl Iterator<Item = &IndexQuote> {
        self.quotes.iter()
    }

    /// Returns the number of indices.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Returns true if the board has no indices.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Flattens the board into one row per index, stamped with `date`.
    #[must_use]
    pub fn rows(&self, date: NaiveDate) -> Vec<IndexRow> {
        self.quotes
            .iter()
            .map(|q| IndexRow {
                name: q.name.clone(),
                value: q.value,
                change_percent: q.change_percent,
                date,
            })
            .collect()
    }
}

impl FromIterator<IndexQuote> for IndexBoard {
    fn from_iter<I: IntoIterator<Item = IndexQuote>>(iter: I) -> Self {
        let mut board = Self::new();
        for quote in iter {
            board.insert(quote);
        }
        board
    }
}

impl Serialize for IndexBoard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Figures {
            value: Option<f64>,
            change_percent: Option<f64>,
        }

        let mut map = serializer.serialize_map(Some(self.quotes.len()))?;
        for quote in &self.quotes {
            map.serialize_entry(
                &quote.name,
                &Figures {
                    value: quote.value,
                    change_percent: quote.change_percent,
                },
            )?;
        }
        map.end()
    }
}

/// Flattened index row, as stored in the processed indices table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexRow {
    /// Index name.
    pub name: String,
    /// Index level.
    pub value: Option<f64>,
    /// Change since previous session, in percent.
    pub change_percent: Option<f64>,
    /// Ingestion date.
    pub date: NaiveDate,
}

/// One row of the equities price list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockQuote {
    /// Ticker symbol.
    pub symbol: String,
    /// Issuer name.
    pub name: String,
    /// ISIN code.
    pub isin: Option<String>,
    /// Last traded price.
    pub last_price: Option<f64>,
    /// Change since previous session.
    pub change: Option<f64>,
    /// Session high.
    pub high: Option<f64>,
    /// Session low.
    pub low: Option<f64>,
    /// Traded volume.
    pub volume: Option<i64>,
    /// Ingestion date.
    pub date: NaiveDate,
}

/// One row of the bonds price list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondQuote {
    /// Bond symbol.
    pub symbol: String,
    /// Issue name.
    pub name: String,
    /// ISIN code.
    pub isin: Option<String>,
    /// Last traded price.
    pub last_price: Option<f64>,
    /// Change since previous session.
    pub change: Option<f64>,
    /// Yield, in percent.
    #[serde(rename = "yield")]
    pub yield_rate: Option<f64>,
    /// Maturity date as displayed by the exchange.
    pub maturity_date: Option<String>,
    /// Ingestion date.
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(name: &str, value: f64) -> IndexQuote {
        IndexQuote::new(name.to_string(), Some(value), Some(0.5))
    }

    #[test]
    fn test_board_replaces_duplicate_names() {
        let mut board = IndexBoard::new();
        board.insert(quote("BRVM Composite", 1.0));
        board.insert(quote("BRVM 30", 2.0));
        board.insert(quote("BRVM Composite", 3.0));

        assert_eq!(board.len(), 2);
        assert_eq!(board.get("BRVM Composite").unwrap().value, Some(3.0));
        let names: Vec<_> = board.iter().map(|q| q.name.as_str()).collect();
        assert_eq!(names, ["BRVM Composite", "BRVM 30"]);
    }

    #[test]
    fn test_board_serializes_as_map() {
        let board: IndexBoard = [IndexQuote::new(
            "BRVM Composite".to_string(),
            Some(1234.56),
            None,
        )]
        .into_iter()
        .collect();

        let json = serde_json::to_value(&board).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"BRVM Composite": {"value": 1234.56, "change_percent": null}})
        );
    }

    #[test]
    fn test_board_rows() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let board: IndexBoard = [quote("BRVM 30", 100.0)].into_iter().collect();
        let rows = board.rows(date);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "BRVM 30");
        assert_eq!(rows[0].date, date);
    }

    #[test]
    fn test_bond_yield_field_name() {
        let bond = BondQuote {
            symbol: "TPCI.O1".to_string(),
            name: "TPCI 6% 2019-2027".to_string(),
            isin: None,
            last_price: Some(10_000.0),
            change: None,
            yield_rate: Some(6.0),
            maturity_date: Some("2027-06-30".to_string()),
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        };
        let json = serde_json::to_value(&bond).unwrap();
        assert_eq!(json["yield"], serde_json::json!(6.0));
        assert_eq!(json["date"], serde_json::json!("2024-01-05"));
    }
}

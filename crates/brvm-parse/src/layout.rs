//! CSS selectors describing the exchange page markup.

/// Selectors locating each entity on its exchange page.
///
/// The markup belongs to the exchange site; these defaults track its current
/// layout and can be overridden when it changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    /// Element whose text tells whether the market is open.
    pub status_banner: String,
    /// Element holding the last update label.
    pub status_date: String,
    /// Indices results table.
    pub indices_table: String,
    /// Equities results table.
    pub stocks_table: String,
    /// Bonds results table.
    pub bonds_table: String,
    /// Data rows, relative to a results table.
    pub row: String,
    /// Cells, relative to a row.
    pub cell: String,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            status_banner: ".market-status".to_string(),
            status_date: ".market-date".to_string(),
            indices_table: "table.indices-table".to_string(),
            stocks_table: "table.stocks-table".to_string(),
            bonds_table: "table.bonds-table".to_string(),
            row: "tbody tr".to_string(),
            cell: "td".to_string(),
        }
    }
}

//! Entity values tagged by kind.

use crate::{BondQuote, EntityKind, IndexBoard, MarketStatus, NewsItem, StockQuote};

/// The value produced for one entity by an ingestion run.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityData {
    /// Exchange status.
    MarketStatus(MarketStatus),
    /// Index levels.
    Indices(IndexBoard),
    /// Equities price list, in page order.
    Stocks(Vec<StockQuote>),
    /// Bonds price list, in page order.
    Bonds(Vec<BondQuote>),
    /// News entries.
    News(Vec<NewsItem>),
}

impl EntityData {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        match self {
            Self::MarketStatus(_) => EntityKind::MarketStatus,
            Self::Indices(_) => EntityKind::Indices,
            Self::Stocks(_) => EntityKind::Stocks,
            Self::Bonds(_) => EntityKind::Bonds,
            Self::News(_) => EntityKind::News,
        }
    }

    /// Returns the number of records carried.
    #[must_use]
    pub const fn record_count(&self) -> usize {
        match self {
            Self::MarketStatus(_) => 1,
            Self::Indices(board) => board.len(),
            Self::Stocks(rows) => rows.len(),
            Self::Bonds(rows) => rows.len(),
            Self::News(items) => items.len(),
        }
    }

    /// Returns true if the value carries no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.record_count() == 0
    }
}

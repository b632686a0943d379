//! Entity kinds.

use serde::{Deserialize, Serialize};

use crate::EntityKindParseError;

/// The unit of parsing and persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Exchange open/closed status.
    MarketStatus,
    /// Market indices (BRVM Composite, BRVM 30, ...).
    Indices,
    /// Listed equities.
    Stocks,
    /// Listed bonds.
    Bonds,
    /// Market news.
    News,
}

impl EntityKind {
    /// Entities fetched by an ingestion run, in processing order.
    pub const INGESTED: [Self; 4] = [Self::MarketStatus, Self::Indices, Self::Stocks, Self::Bonds];

    /// Returns all entity kinds.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::MarketStatus,
            Self::Indices,
            Self::Stocks,
            Self::Bonds,
            Self::News,
        ]
    }

    /// Returns the identifier used in snapshot file names.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MarketStatus => "market_status",
            Self::Indices => "indices",
            Self::Stocks => "stocks",
            Self::Bonds => "bonds",
            Self::News => "news",
        }
    }

    /// Returns the URL path segment used by the serving layer.
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::MarketStatus => "market-status",
            _ => self.as_str(),
        }
    }

    /// Returns true if the entity is flattened into a processed CSV table.
    #[must_use]
    pub const fn has_processed_artifact(&self) -> bool {
        matches!(self, Self::Indices | Self::Stocks | Self::Bonds)
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EntityKind {
    type Err = EntityKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "market_status" | "market-status" | "status" => Ok(Self::MarketStatus),
            "indices" | "index" => Ok(Self::Indices),
            "stocks" | "stock" | "equities" => Ok(Self::Stocks),
            "bonds" | "bond" => Ok(Self::Bonds),
            "news" => Ok(Self::News),
            _ => Err(EntityKindParseError(s.to_string())),
        }
    }
}

//! Market status.

use serde::{Deserialize, Serialize};

/// Trading state of the exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MarketState {
    /// Trading session in progress.
    Open,
    /// Trading session closed.
    Closed,
    /// No status information available.
    #[default]
    Unknown,
}

impl MarketState {
    /// Classifies the status banner text of the exchange site.
    ///
    /// Any text mentioning an open session (`ouvert` or `open`, in any case)
    /// is [`MarketState::Open`]; everything else is [`MarketState::Closed`].
    #[must_use]
    pub fn from_banner(text: &str) -> Self {
        let text = text.to_lowercase();
        if text.contains("ouvert") || text.contains("open") {
            Self::Open
        } else {
            Self::Closed
        }
    }

    /// Returns the state as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for MarketState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Exchange status as published on the status page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MarketStatus {
    /// Current trading state.
    pub market_status: MarketState,
    /// Last update label as displayed by the exchange (free text).
    #[serde(default)]
    pub last_update: String,
}

impl MarketStatus {
    /// Creates a new market status.
    #[must_use]
    pub const fn new(market_status: MarketState, last_update: String) -> Self {
        Self {
            market_status,
            last_update,
        }
    }

    /// Status reported when nothing is known.
    #[must_use]
    pub const fn unknown() -> Self {
        Self::new(MarketState::Unknown, String::new())
    }
}

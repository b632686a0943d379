//! Error types for core records.

use thiserror::Error;

/// Error returned when an entity name is not recognized.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown entity: {0}. Valid options: market-status, indices, stocks, bonds, news")]
pub struct EntityKindParseError(pub String);

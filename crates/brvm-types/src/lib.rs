//! Core types for the BRVM snapshot pipeline.
//!
//! This crate provides the records produced by one ingestion run:
//!
//! - [`MarketStatus`] - Open/closed state of the exchange
//! - [`IndexQuote`] / [`IndexBoard`] - Index levels keyed by index name
//! - [`StockQuote`] - One row of the equities price list
//! - [`BondQuote`] - One row of the bonds price list
//! - [`NewsItem`] - Market news entry
//! - [`EntityKind`] - The unit of parsing and persistence
//! - [`EntityData`] - Any of the above, tagged by kind

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod data;
mod error;
mod kind;
mod news;
mod quote;
mod status;

pub use data::EntityData;
pub use error::EntityKindParseError;
pub use kind::EntityKind;
pub use news::NewsItem;
pub use quote::{BondQuote, IndexBoard, IndexQuote, IndexRow, StockQuote};
pub use status::{MarketState, MarketStatus};

//! HTML extraction for the BRVM snapshot pipeline.
//!
//! This crate turns fetched exchange pages into records:
//!
//! - [`parse_number`] / [`parse_float`] / [`parse_int`] - Locale-aware numeric normalization
//! - [`PageLayout`] - CSS selectors the parsers depend on
//! - [`parse_market_status`] - Status banner
//! - [`parse_indices`] - Index table
//! - [`parse_stocks`] - Equities price list
//! - [`parse_bonds`] - Bonds price list
//!
//! Field-level failures degrade to `None`; only a missing table or an invalid
//! selector is an error.

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bonds;
mod error;
mod html;
mod indices;
mod layout;
mod number;
mod status;
mod stocks;

pub use bonds::{BOND_MIN_CELLS, parse_bonds};
pub use error::ParseError;
pub use indices::{INDEX_MIN_CELLS, parse_indices};
pub use layout::PageLayout;
pub use number::{Number, NumberKind, parse_float, parse_int, parse_number};
pub use status::parse_market_status;
pub use stocks::{STOCK_MIN_CELLS, parse_stocks};

//! Market status page.

use crate::PageLayout;
use crate::ParseError;
use crate::html::{element_text, selector};
use brvm_types::{MarketState, MarketStatus};
use scraper::Html;
use tracing::debug;

/// Extracts the market status from the status page.
///
/// A missing banner yields [`MarketState::Unknown`] and a missing date an
/// empty `last_update`; neither is an error.
///
/// # Errors
///
/// Returns an error only if a configured selector is invalid.
pub fn parse_market_status(html: &str, layout: &PageLayout) -> Result<MarketStatus, ParseError> {
    let banner_selector = selector(&layout.status_banner)?;
    let date_selector = selector(&layout.status_date)?;
    let document = Html::parse_document(html);

    let market_status = document
        .select(&banner_selector)
        .next()
        .map_or(MarketState::Unknown, |banner| {
            MarketState::from_banner(&element_text(banner))
        });

    let last_update = document
        .select(&date_selector)
        .next()
        .map(element_text)
        .unwrap_or_default();

    debug!(%market_status, last_update = %last_update, "parsed market status");
    Ok(MarketStatus::new(market_status, last_update))
}

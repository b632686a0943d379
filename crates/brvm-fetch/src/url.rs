//! Exchange page URLs.

use brvm_types::EntityKind;

/// Base URL of the exchange website.
pub const BASE_URL: &str = "https://www.brvm.org";

/// Maps each ingested entity to the page it is scraped from.
///
/// # Example
///
/// ```
/// use brvm_fetch::url::PageUrls;
/// use brvm_types::EntityKind;
///
/// let urls = PageUrls::default();
/// assert_eq!(
///     urls.for_kind(EntityKind::Stocks).as_deref(),
///     Some("https://www.brvm.org/fr/cours-actions/liste")
/// );
/// assert_eq!(urls.for_kind(EntityKind::News), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageUrls {
    base: String,
}

impl Default for PageUrls {
    fn default() -> Self {
        Self::new(BASE_URL)
    }
}

impl PageUrls {
    /// Creates a URL table rooted at `base` (scheme and host, no trailing slash needed).
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    /// Returns the base URL.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Returns the page path for an entity, if the entity is scraped.
    #[must_use]
    pub const fn path(kind: EntityKind) -> Option<&'static str> {
        match kind {
            EntityKind::MarketStatus => Some("/fr/marche/status"),
            EntityKind::Indices => Some("/fr/indices/historique"),
            EntityKind::Stocks => Some("/fr/cours-actions/liste"),
            EntityKind::Bonds => Some("/fr/cours-obligations/liste"),
            EntityKind::News => None,
        }
    }

    /// Returns the full page URL for an entity, if the entity is scraped.
    #[must_use]
    pub fn for_kind(&self, kind: EntityKind) -> Option<String> {
        Self::path(kind).map(|path| format!("{}{}", self.base, path))
    }
}

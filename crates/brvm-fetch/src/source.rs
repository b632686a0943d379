//! Abstraction over where pages come from.

use crate::{FetchError, PageFetcher};
use async_trait::async_trait;

/// A source of page bodies, addressed by URL.
///
/// [`PageFetcher`] is the production implementation; the orchestrator only
/// depends on this trait.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Returns the body of the page at `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the page could not be retrieved.
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError>;
}

#[async_trait]
impl PageSource for PageFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        self.fetch(url).await
    }
}

//! Market news.

use serde::{Deserialize, Serialize};

/// A market news entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    /// Headline.
    pub title: String,
    /// Publication date as published.
    #[serde(default)]
    pub date: String,
    /// Body text.
    #[serde(default)]
    pub content: String,
    /// Publisher.
    #[serde(default)]
    pub source: String,
}

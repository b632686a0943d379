//! Error types for page extraction.

use thiserror::Error;

/// Errors that prevent a page from yielding any records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A configured selector is not valid CSS.
    #[error("Invalid selector '{selector}': {reason}")]
    InvalidSelector {
        /// The offending selector.
        selector: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// The structural anchor (results table) is absent from the page.
    #[error("No element matches '{selector}'")]
    MissingAnchor {
        /// The selector that matched nothing.
        selector: String,
    },
}

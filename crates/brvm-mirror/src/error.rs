//! Error types for the store mirror.

use thiserror::Error;

/// Errors raised while mirroring to a document store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The connection string is not a supported store URI.
    #[error("Unsupported store URI: {0}")]
    InvalidUri(String),

    /// Transport-level failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store refused the documents.
    #[error("Store rejected {collection} documents with status {status}")]
    Rejected {
        /// Target collection.
        collection: String,
        /// HTTP status code.
        status: u16,
    },

    /// A value could not be converted to a document.
    #[error("Failed to build document: {0}")]
    Serialize(#[from] serde_json::Error),

    /// MongoDB driver failure.
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    /// A document could not be encoded as BSON.
    #[error("Failed to encode BSON document: {0}")]
    Bson(#[from] mongodb::bson::ser::Error),
}

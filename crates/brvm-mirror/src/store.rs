//! Document store seam.

use crate::StoreError;
use async_trait::async_trait;
use serde_json::Value;

/// Database holding every mirrored collection.
pub const DATABASE: &str = "brvm_data";

/// A backend accepting JSON documents into named collections.
#[async_trait]
pub trait DocumentStore: Send + Sync + std::fmt::Debug {
    /// Inserts documents into `collection`, returning how many were stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unreachable or refuses the insert.
    async fn insert_many(&self, collection: &str, documents: Vec<Value>)
    -> Result<usize, StoreError>;
}

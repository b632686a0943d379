//! MongoDB document store.

use crate::{DATABASE, DocumentStore, StoreError};
use async_trait::async_trait;
use mongodb::Client;
use mongodb::bson::{self, Document};
use serde_json::Value;
use tracing::debug;

/// Inserts documents into collections of the `brvm_data` database.
#[derive(Debug, Clone)]
pub struct MongoDocumentStore {
    client: Client,
}

impl MongoDocumentStore {
    /// Creates a client for a `mongodb://` or `mongodb+srv://` connection string.
    ///
    /// No connection is made until the first insert.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection string is malformed or, for
    /// `mongodb+srv://`, its DNS records cannot be resolved.
    pub async fn connect(uri: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(uri).await?;
        Ok(Self { client })
    }

    /// Returns true if `uri` uses a MongoDB scheme.
    #[must_use]
    pub fn accepts(uri: &str) -> bool {
        uri.starts_with("mongodb://") || uri.starts_with("mongodb+srv://")
    }
}

#[async_trait]
impl DocumentStore for MongoDocumentStore {
    async fn insert_many(
        &self,
        collection: &str,
        documents: Vec<Value>,
    ) -> Result<usize, StoreError> {
        if documents.is_empty() {
            return Ok(0);
        }
        let documents = documents
            .iter()
            .map(bson::to_document)
            .collect::<Result<Vec<Document>, _>>()?;

        debug!(collection, documents = documents.len(), "inserting documents");
        let result = self
            .client
            .database(DATABASE)
            .collection::<Document>(collection)
            .insert_many(documents)
            .await?;
        Ok(result.inserted_ids.len())
    }
}

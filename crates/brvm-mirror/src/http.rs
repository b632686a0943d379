//! Document store reached over HTTP.

use crate::{DATABASE, DocumentStore, StoreError};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Posts documents as a JSON array to `<base>/brvm_data/<collection>`.
#[derive(Debug, Clone)]
pub struct HttpDocumentStore {
    client: Client,
    base: String,
}

impl HttpDocumentStore {
    /// Creates a store client for the given base URI.
    ///
    /// # Errors
    ///
    /// Returns an error if the URI is not `http(s)://` or the client cannot be built.
    pub fn new(uri: &str) -> Result<Self, StoreError> {
        if !(uri.starts_with("http://") || uri.starts_with("https://")) {
            return Err(StoreError::InvalidUri(uri.to_string()));
        }
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self {
            client,
            base: uri.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the endpoint of a collection.
    #[must_use]
    pub fn collection_url(&self, collection: &str) -> String {
        format!("{}/{DATABASE}/{collection}", self.base)
    }
}

#[async_trait]
impl DocumentStore for HttpDocumentStore {
    async fn insert_many(
        &self,
        collection: &str,
        documents: Vec<Value>,
    ) -> Result<usize, StoreError> {
        let url = self.collection_url(collection);
        let count = documents.len();
        debug!(%url, documents = count, "posting documents");

        let response = self.client.post(&url).json(&documents).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Rejected {
                collection: collection.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(count)
    }
}

//! Store capability selected at construction time.

use crate::{DocumentStore, HttpDocumentStore, MongoDocumentStore, StoreError, documents_for};
use brvm_types::EntityData;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{info, warn};

/// Mirror capability of a pipeline.
#[derive(Debug, Clone, Default)]
pub enum StoreAdapter {
    /// No store configured; storing is a no-op.
    #[default]
    Disabled,
    /// Documents are sent to the given store.
    Connected(Arc<dyn DocumentStore>),
}

impl StoreAdapter {
    /// Selects the adapter from an optional connection string.
    ///
    /// `None` disables mirroring. `mongodb://` and `mongodb+srv://` URIs
    /// connect a [`MongoDocumentStore`]; `http://` and `https://` URIs an
    /// [`HttpDocumentStore`].
    ///
    /// # Errors
    ///
    /// Returns an error for any other scheme or a malformed connection string.
    pub async fn from_uri(uri: Option<&str>) -> Result<Self, StoreError> {
        let Some(uri) = uri else {
            return Ok(Self::Disabled);
        };
        if MongoDocumentStore::accepts(uri) {
            Ok(Self::connected(MongoDocumentStore::connect(uri).await?))
        } else {
            Ok(Self::connected(HttpDocumentStore::new(uri)?))
        }
    }

    /// Like [`StoreAdapter::from_uri`], but an unusable connection string
    /// disables mirroring with a warning instead of failing.
    pub async fn from_uri_or_disabled(uri: Option<&str>) -> Self {
        match Self::from_uri(uri).await {
            Ok(adapter) => adapter,
            Err(e) => {
                warn!(error = %e, "document store unavailable, mirroring disabled");
                Self::Disabled
            }
        }
    }

    /// Wraps a store backend.
    pub fn connected(store: impl DocumentStore + 'static) -> Self {
        Self::Connected(Arc::new(store))
    }

    /// Returns true if a store is connected.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        matches!(self, Self::Connected(_))
    }

    /// Mirrors `data` into the collection named after its entity.
    ///
    /// Returns `Ok(None)` when disabled, otherwise the number of stored documents.
    ///
    /// # Errors
    ///
    /// Returns an error if documents cannot be built or the store fails.
    pub async fn store(
        &self,
        data: &EntityData,
        date: NaiveDate,
    ) -> Result<Option<usize>, StoreError> {
        let Self::Connected(store) = self else {
            return Ok(None);
        };
        let collection = data.kind().as_str();
        let documents = documents_for(data, date)?;
        let stored = store.insert_many(collection, documents).await?;
        info!(collection, documents = stored, "mirrored to store");
        Ok(Some(stored))
    }
}

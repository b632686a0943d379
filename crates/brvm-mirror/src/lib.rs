//! Best-effort document store mirror for the BRVM snapshot pipeline.
//!
//! Snapshot files are the source of truth. When a store is configured, each
//! entity value is also mirrored as JSON documents into a collection named
//! after the entity, in the `brvm_data` database.
//!
//! - [`StoreAdapter`] - Disabled or connected capability, chosen at construction
//! - [`DocumentStore`] - Backend seam
//! - [`MongoDocumentStore`] - MongoDB backend
//! - [`HttpDocumentStore`] - Backend posting documents to an HTTP endpoint

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod adapter;
mod documents;
mod error;
mod http;
mod mongo;
mod store;

pub use adapter::StoreAdapter;
pub use documents::documents_for;
pub use error::StoreError;
pub use http::HttpDocumentStore;
pub use mongo::MongoDocumentStore;
pub use store::{DATABASE, DocumentStore};

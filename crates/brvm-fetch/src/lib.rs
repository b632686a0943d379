//! Page fetching for the BRVM snapshot pipeline.
//!
//! This crate provides the first stage of an ingestion run:
//!
//! - [`url::PageUrls`] - Maps each ingested entity to its exchange page
//! - [`RetryPolicy`] / [`retry`] - Bounded retries with exponential backoff
//! - [`PageFetcher`] - HTTP client with a reused session and retries
//! - [`PageSource`] - The seam the orchestrator fetches through

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod retry;
mod source;
pub mod url;

pub use client::{FetchError, FetcherConfig, PageFetcher};
pub use retry::{RetryError, RetryPolicy, retry};
pub use source::PageSource;

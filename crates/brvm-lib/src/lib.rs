//! Ingestion library for BRVM market data snapshots.
//!
//! This is a facade crate that re-exports functionality from the brvm
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use brvm_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let layout = SnapshotLayout::with_default_path();
//!     let pipeline = Pipeline::new(PageFetcher::with_defaults()?, SnapshotWriter::new(layout.clone()));
//!
//!     let report = pipeline.run().await;
//!     println!("{} entities written", report.written_count());
//!
//!     let resolver = SnapshotResolver::new(layout);
//!     let indices = resolver.resolve(EntityKind::Indices, report.date)?;
//!     println!("{}", serde_json::to_string_pretty(&indices.snapshot)?);
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use brvm_types::*;

// Re-export parsers
pub use brvm_parse::{
    BOND_MIN_CELLS, INDEX_MIN_CELLS, Number, NumberKind, PageLayout, ParseError, STOCK_MIN_CELLS,
    parse_bonds, parse_float, parse_indices, parse_int, parse_market_status, parse_number,
    parse_stocks,
};

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use brvm_fetch::url::{BASE_URL, PageUrls};
#[cfg(feature = "fetch")]
pub use brvm_fetch::{FetchError, FetcherConfig, PageFetcher, PageSource, RetryPolicy};

// Re-export snapshot storage
#[cfg(feature = "snapshot")]
pub use brvm_format::{CsvFormatter, FormatError, Formatter, JsonFormatter, SnapshotFormat};

#[cfg(feature = "snapshot")]
pub use brvm_snapshot::{
    Resolved, Snapshot, SnapshotError, SnapshotLayout, SnapshotResolver, SnapshotWriter, Written,
};

// Re-export store mirror
#[cfg(feature = "mirror")]
pub use brvm_mirror::{
    DocumentStore, HttpDocumentStore, MongoDocumentStore, StoreAdapter, StoreError,
};

// Re-export orchestrator
#[cfg(feature = "pipeline")]
pub use brvm_pipeline::{EntityOutcome, EntityStatus, MirrorStatus, Pipeline, RunId, RunReport};

/// Prelude module for convenient imports.
///
/// ```
/// use brvm_lib::prelude::*;
/// ```
pub mod prelude {
    pub use brvm_types::{
        BondQuote, EntityData, EntityKind, IndexBoard, IndexQuote, MarketState, MarketStatus,
        NewsItem, StockQuote,
    };

    pub use brvm_parse::{PageLayout, parse_float, parse_int};

    #[cfg(feature = "fetch")]
    pub use brvm_fetch::url::PageUrls;
    #[cfg(feature = "fetch")]
    pub use brvm_fetch::{FetcherConfig, PageFetcher, PageSource};

    #[cfg(feature = "snapshot")]
    pub use brvm_snapshot::{Snapshot, SnapshotLayout, SnapshotResolver, SnapshotWriter};

    #[cfg(feature = "mirror")]
    pub use brvm_mirror::StoreAdapter;

    #[cfg(feature = "pipeline")]
    pub use brvm_pipeline::{Pipeline, RunReport};
}

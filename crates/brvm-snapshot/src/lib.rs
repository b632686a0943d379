//! Dated snapshot files for the BRVM snapshot pipeline.
//!
//! Snapshots live under a data directory split in two areas:
//!
//! - `raw/<entity>_<YYYY-MM-DD>.json` - Documents as parsed
//! - `processed/<entity>_<YYYY-MM-DD>.csv` - Flattened tables
//!
//! [`SnapshotWriter`] replaces files atomically. [`SnapshotResolver`] returns
//! the exact dated file when present and otherwise the latest one.

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod layout;
mod resolver;
mod writer;

pub use error::{Result, SnapshotError};
pub use layout::SnapshotLayout;
pub use resolver::{Resolved, Snapshot, SnapshotResolver};
pub use writer::{SnapshotWriter, Written};

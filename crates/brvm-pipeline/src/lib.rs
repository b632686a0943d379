//! Ingestion orchestrator for the BRVM snapshot pipeline.
//!
//! - [`Pipeline`] - Fetches, parses, persists and mirrors each entity in order
//! - [`RunReport`] - Per-entity outcome of one run
//! - [`EntityStatus`] / [`MirrorStatus`] - Outcome states

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod pipeline;
mod report;

pub use pipeline::{Pipeline, parse_page};
pub use report::{EntityOutcome, EntityStatus, MirrorStatus, RunId, RunReport};

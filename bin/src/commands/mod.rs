//! CLI command implementations.

pub(crate) mod collect;
pub(crate) mod init;
pub(crate) mod schedule;
pub(crate) mod serve;
pub(crate) mod show;

use anyhow::{Context, Result};
use brvm_lib::prelude::*;
use chrono::{Local, NaiveDate};
use std::path::PathBuf;

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub(crate) struct Settings {
    pub(crate) layout: SnapshotLayout,
    pub(crate) store_uri: Option<String>,
    pub(crate) base_url: String,
}

impl Settings {
    pub(crate) fn new(
        data_dir: Option<PathBuf>,
        store_uri: Option<String>,
        base_url: String,
    ) -> Self {
        let layout = data_dir.map_or_else(SnapshotLayout::with_default_path, SnapshotLayout::new);
        Self {
            layout,
            store_uri,
            base_url,
        }
    }

    /// Builds the pipeline used by `collect` and `schedule`.
    ///
    /// An unusable store URI only disables mirroring.
    pub(crate) async fn pipeline(&self) -> Result<Pipeline<PageFetcher>> {
        let fetcher = PageFetcher::with_defaults().context("Failed to create HTTP client")?;
        let store = StoreAdapter::from_uri_or_disabled(self.store_uri.as_deref()).await;
        if store.is_enabled() {
            tracing::info!("mirroring snapshots to document store");
        }

        Ok(Pipeline::new(fetcher, SnapshotWriter::new(self.layout.clone()))
            .with_urls(PageUrls::new(self.base_url.as_str()))
            .with_store(store))
    }
}

/// Parses an optional `YYYY-MM-DD` date, defaulting to today.
pub(crate) fn parse_date(date: Option<&str>) -> Result<NaiveDate> {
    date.map_or_else(
        || Ok(Local::now().date_naive()),
        |s| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .with_context(|| format!("Invalid date: {s}"))
        },
    )
}

//! Pipeline orchestrator.

use crate::{EntityOutcome, EntityStatus, MirrorStatus, RunReport};
use brvm_fetch::PageSource;
use brvm_fetch::url::PageUrls;
use brvm_mirror::StoreAdapter;
use brvm_parse::{
    PageLayout, ParseError, parse_bonds, parse_indices, parse_market_status, parse_stocks,
};
use brvm_snapshot::SnapshotWriter;
use brvm_types::{EntityData, EntityKind};
use chrono::{Local, NaiveDate};
use tokio::sync::Mutex;
use tracing::{Instrument, Span, info, info_span, warn};

/// Parses a fetched page into the value of `kind`.
///
/// News has no exchange page and always parses to an empty list.
///
/// # Errors
///
/// Returns an error if the page lacks its anchor markup or a selector is invalid.
pub fn parse_page(
    kind: EntityKind,
    html: &str,
    layout: &PageLayout,
    date: NaiveDate,
) -> Result<EntityData, ParseError> {
    Ok(match kind {
        EntityKind::MarketStatus => EntityData::MarketStatus(parse_market_status(html, layout)?),
        EntityKind::Indices => EntityData::Indices(parse_indices(html, layout)?),
        EntityKind::Stocks => EntityData::Stocks(parse_stocks(html, layout, date)?),
        EntityKind::Bonds => EntityData::Bonds(parse_bonds(html, layout, date)?),
        EntityKind::News => EntityData::News(Vec::new()),
    })
}

/// Runs ingestion: fetch, parse, persist and mirror each entity in fixed order.
///
/// Entities are processed one at a time (market status, indices, stocks,
/// bonds). A failure in one entity never stops the others. After all four,
/// processed tables are derived from the values collected in memory.
///
/// Overlapping calls to [`Pipeline::run_for`] are serialized.
#[derive(Debug)]
pub struct Pipeline<S> {
    source: S,
    urls: PageUrls,
    layout: PageLayout,
    writer: SnapshotWriter,
    store: StoreAdapter,
    run_lock: Mutex<()>,
    span: Span,
}

impl<S: PageSource> Pipeline<S> {
    /// Creates a pipeline with default page URLs, layout and no store.
    #[must_use]
    pub fn new(source: S, writer: SnapshotWriter) -> Self {
        Self {
            source,
            urls: PageUrls::default(),
            layout: PageLayout::default(),
            writer,
            store: StoreAdapter::Disabled,
            run_lock: Mutex::new(()),
            span: Span::none(),
        }
    }

    /// Sets the page URLs.
    #[must_use]
    pub fn with_urls(mut self, urls: PageUrls) -> Self {
        self.urls = urls;
        self
    }

    /// Sets the page layout.
    #[must_use]
    pub fn with_layout(mut self, layout: PageLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Sets the store adapter.
    #[must_use]
    pub fn with_store(mut self, store: StoreAdapter) -> Self {
        self.store = store;
        self
    }

    /// Sets the logging context.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Returns the snapshot writer.
    #[must_use]
    pub const fn writer(&self) -> &SnapshotWriter {
        &self.writer
    }

    /// Returns the store adapter.
    #[must_use]
    pub const fn store(&self) -> &StoreAdapter {
        &self.store
    }

    /// Runs ingestion for the local calendar date.
    pub async fn run(&self) -> RunReport {
        self.run_for(Local::now().date_naive()).await
    }

    /// Runs ingestion, stamping snapshots with `date`.
    ///
    /// Never fails: per-entity failures are recorded in the report.
    pub async fn run_for(&self, date: NaiveDate) -> RunReport {
        let _running = self.run_lock.lock().await;
        let mut report = RunReport::new(date);
        let span = info_span!(parent: &self.span, "run", run_id = %report.run_id, %date);

        async {
            info!("starting ingestion run");
            let mut collected = Vec::new();

            for kind in EntityKind::INGESTED {
                let (outcome, data) = self
                    .ingest(kind, date)
                    .instrument(info_span!("entity", entity = %kind))
                    .await;
                report.entities.push(outcome);
                collected.extend(data);
            }

            for data in &collected {
                self.derive_table(data, date, &mut report);
            }

            report.mark_completed();
            info!(
                written = report.written_count(),
                failed = report.failed_count(),
                "ingestion run finished"
            );
        }
        .instrument(span)
        .await;

        report
    }

    /// Fetches, parses, writes the raw document and mirrors one entity.
    ///
    /// Returns the parsed value when it holds records.
    async fn ingest(
        &self,
        kind: EntityKind,
        date: NaiveDate,
    ) -> (EntityOutcome, Option<EntityData>) {
        let mut outcome = EntityOutcome::new(kind);
        if !self.store.is_enabled() {
            outcome.mirror = MirrorStatus::Disabled;
        }

        let Some(url) = self.urls.for_kind(kind) else {
            outcome.fail(EntityStatus::FetchFailed, format!("no page for {kind}"));
            return (outcome, None);
        };

        let html = match self.source.fetch_page(&url).await {
            Ok(html) => html,
            Err(e) => {
                warn!(%url, error = %e, "fetch failed");
                outcome.fail(EntityStatus::FetchFailed, e);
                return (outcome, None);
            }
        };

        let data = match parse_page(kind, &html, &self.layout, date) {
            Ok(data) => data,
            Err(e) => {
                warn!(%url, error = %e, "parse failed");
                outcome.fail(EntityStatus::ParseFailed, e);
                return (outcome, None);
            }
        };

        outcome.records = data.record_count();
        if data.is_empty() {
            info!("no records, keeping previous snapshot");
            outcome.status = EntityStatus::Empty;
            return (outcome, None);
        }

        match self.writer.write_raw(&data, date) {
            Ok(path) => {
                outcome.raw_path = Some(path);
                outcome.status = EntityStatus::Written;
            }
            Err(e) => {
                warn!(error = %e, "raw snapshot write failed");
                outcome.fail(EntityStatus::WriteFailed, e);
            }
        }

        outcome.mirror = match self.store.store(&data, date).await {
            Ok(None) => MirrorStatus::Disabled,
            Ok(Some(documents)) => MirrorStatus::Stored { documents },
            Err(e) => {
                warn!(error = %e, "store mirror failed");
                MirrorStatus::Failed {
                    error: e.to_string(),
                }
            }
        };

        info!(records = outcome.records, status = %outcome.status, "entity ingested");
        (outcome, Some(data))
    }

    /// Writes the processed table of a collected value and records the outcome.
    fn derive_table(&self, data: &EntityData, date: NaiveDate, report: &mut RunReport) {
        let kind = data.kind();
        if !kind.has_processed_artifact() {
            return;
        }
        let Some(outcome) = report.outcome_mut(kind) else {
            return;
        };

        match self.writer.write_processed(data, date) {
            Ok(path) => outcome.processed_path = path,
            Err(e) => {
                warn!(entity = %kind, error = %e, "processed snapshot write failed");
                outcome.fail(EntityStatus::WriteFailed, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use brvm_fetch::FetchError;
    use brvm_mirror::{DocumentStore, StoreError};
    use brvm_snapshot::{Snapshot, SnapshotLayout, SnapshotResolver};
    use serde_json::Value;
    use std::collections::HashMap;
    use std::fs;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tempfile::TempDir;

    const BASE: &str = "http://brvm.test";

    const STATUS_PAGE: &str = r#"<div class="market-status">Marché ouvert</div>
        <div class="market-date">19/10/2026 15:30</div>"#;
    const INDICES_PAGE: &str = r#"<table class="indices-table"><tbody>
        <tr><td>BRVM Composite</td><td>1 234,56</td><td>0,42%</td></tr>
        </tbody></table>"#;
    const STOCKS_PAGE: &str = r#"<table class="stocks-table"><tbody>
        <tr><td>SNTS</td><td>Sonatel</td><td>SN0000000019</td><td>25 000</td>
            <td>1,5</td><td>25 500</td><td>24 800</td><td>1 200</td></tr>
        <tr><td>ORAC</td><td>Orange CI</td><td></td><td>n/d</td><td>0</td><td>1</td><td>1</td></tr>
        </tbody></table>"#;
    const BONDS_PAGE: &str = r#"<table class="bonds-table"><tbody>
        <tr><td>TPCI.O27</td><td>TPCI 2027</td><td></td><td>10 000</td><td>0</td><td>6,5</td></tr>
        </tbody></table>"#;

    /// Serves canned pages; unknown URLs answer 404.
    #[derive(Debug, Default)]
    struct MemorySource {
        pages: HashMap<String, String>,
        delay: Option<Duration>,
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
    }

    impl MemorySource {
        fn with(pages: &[(EntityKind, &str)]) -> Self {
            let urls = PageUrls::new(BASE);
            Self {
                pages: pages
                    .iter()
                    .filter_map(|(kind, html)| Some((urls.for_kind(*kind)?, (*html).to_string())))
                    .collect(),
                ..Default::default()
            }
        }

        fn all() -> Self {
            Self::with(&[
                (EntityKind::MarketStatus, STATUS_PAGE),
                (EntityKind::Indices, INDICES_PAGE),
                (EntityKind::Stocks, STOCKS_PAGE),
                (EntityKind::Bonds, BONDS_PAGE),
            ])
        }
    }

    #[async_trait]
    impl PageSource for MemorySource {
        async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            self.pages.get(url).cloned().ok_or_else(|| FetchError::Status {
                url: url.to_string(),
                status: 404,
            })
        }
    }

    #[derive(Debug, Default)]
    struct MemoryStore {
        inserted: std::sync::Mutex<Vec<(String, Vec<Value>)>>,
    }

    #[async_trait]
    impl DocumentStore for MemoryStore {
        async fn insert_many(
            &self,
            collection: &str,
            documents: Vec<Value>,
        ) -> Result<usize, StoreError> {
            let count = documents.len();
            self.inserted
                .lock()
                .unwrap()
                .push((collection.to_string(), documents));
            Ok(count)
        }
    }

    #[derive(Debug)]
    struct DownStore;

    #[async_trait]
    impl DocumentStore for DownStore {
        async fn insert_many(
            &self,
            collection: &str,
            _documents: Vec<Value>,
        ) -> Result<usize, StoreError> {
            Err(StoreError::Rejected {
                collection: collection.to_string(),
                status: 503,
            })
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn pipeline<S: PageSource>(source: S, temp_dir: &TempDir) -> Pipeline<S> {
        let writer = SnapshotWriter::new(SnapshotLayout::new(temp_dir.path()));
        Pipeline::new(source, writer).with_urls(PageUrls::new(BASE))
    }

    #[tokio::test]
    async fn test_composite_index_end_to_end() {
        let temp_dir = TempDir::new().unwrap();
        let pipeline = pipeline(
            MemorySource::with(&[(EntityKind::Indices, INDICES_PAGE)]),
            &temp_dir,
        );

        let report = pipeline.run_for(date()).await;

        let indices = report.outcome(EntityKind::Indices).unwrap();
        assert_eq!(indices.status, EntityStatus::Written);
        assert_eq!(indices.records, 1);

        let raw: Value =
            serde_json::from_str(&fs::read_to_string(indices.raw_path.as_ref().unwrap()).unwrap())
                .unwrap();
        assert_eq!(
            raw,
            serde_json::json!({"BRVM Composite": {"value": 1234.56, "change_percent": 0.42}})
        );
        let processed = fs::read_to_string(indices.processed_path.as_ref().unwrap()).unwrap();
        assert!(processed.contains("BRVM Composite,1234.56,0.42,2026-10-19"));
    }

    #[tokio::test]
    async fn test_full_run_in_fixed_order() {
        let temp_dir = TempDir::new().unwrap();
        let pipeline = pipeline(MemorySource::all(), &temp_dir);

        let report = pipeline.run_for(date()).await;

        let kinds: Vec<_> = report.entities.iter().map(|o| o.kind).collect();
        assert_eq!(kinds, EntityKind::INGESTED);
        assert_eq!(report.written_count(), 4);
        assert!(report.completed_at.is_some());

        let stocks = report.outcome(EntityKind::Stocks).unwrap();
        assert_eq!(stocks.records, 2);
        assert_eq!(
            stocks.raw_path,
            Some(temp_dir.path().join("raw/stocks_2026-10-19.json"))
        );
        assert!(stocks.processed_path.is_some());
        let bonds = report.outcome(EntityKind::Bonds).unwrap();
        assert_eq!(
            bonds.raw_path,
            Some(temp_dir.path().join("raw/bonds_2026-10-19.json"))
        );
        let raw_bonds: Value =
            serde_json::from_str(&fs::read_to_string(bonds.raw_path.as_ref().unwrap()).unwrap())
                .unwrap();
        assert_eq!(raw_bonds[0]["symbol"], "TPCI.O27");
        assert_eq!(stocks.mirror, MirrorStatus::Disabled);

        let status = report.outcome(EntityKind::MarketStatus).unwrap();
        assert_eq!(status.processed_path, None);
        let raw = fs::read_to_string(status.raw_path.as_ref().unwrap()).unwrap();
        assert!(raw.contains("\"market_status\": \"open\""));
    }

    #[tokio::test]
    async fn test_fetch_failures_do_not_stop_the_run() {
        let temp_dir = TempDir::new().unwrap();
        let pipeline = pipeline(
            MemorySource::with(&[(EntityKind::Bonds, BONDS_PAGE)]),
            &temp_dir,
        );

        let report = pipeline.run_for(date()).await;

        assert_eq!(report.failed_count(), 3);
        let status = report.outcome(EntityKind::MarketStatus).unwrap();
        assert_eq!(status.status, EntityStatus::FetchFailed);
        assert!(status.error.as_deref().unwrap().contains("404"));
        assert_eq!(
            report.outcome(EntityKind::Bonds).unwrap().status,
            EntityStatus::Written
        );
    }

    #[tokio::test]
    async fn test_missing_table_is_parse_failure() {
        let temp_dir = TempDir::new().unwrap();
        let pipeline = pipeline(
            MemorySource::with(&[(EntityKind::Stocks, "<p>Maintenance</p>")]),
            &temp_dir,
        );

        let report = pipeline.run_for(date()).await;

        let stocks = report.outcome(EntityKind::Stocks).unwrap();
        assert_eq!(stocks.status, EntityStatus::ParseFailed);
        assert_eq!(stocks.processed_path, None);
    }

    #[tokio::test]
    async fn test_empty_table_keeps_previous_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let yesterday = date().pred_opt().unwrap();
        pipeline(MemorySource::all(), &temp_dir)
            .run_for(yesterday)
            .await;

        let empty_stocks = r#"<table class="stocks-table"><tbody>
            <tr><td>SNTS</td><td>Sonatel</td><td>SN0000000019</td><td>1</td><td>0</td></tr>
            </tbody></table>"#;
        let report = pipeline(
            MemorySource::with(&[(EntityKind::Stocks, empty_stocks)]),
            &temp_dir,
        )
        .run_for(date())
        .await;

        let stocks = report.outcome(EntityKind::Stocks).unwrap();
        assert_eq!(stocks.status, EntityStatus::Empty);
        assert_eq!(stocks.records, 0);
        assert_eq!(stocks.processed_path, None);

        let resolver = SnapshotResolver::new(SnapshotLayout::new(temp_dir.path()));
        let resolved = resolver.resolve(EntityKind::Stocks, date()).unwrap();
        let Snapshot::Stocks(quotes) = resolved.snapshot else {
            panic!("expected stocks");
        };
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].date, yesterday);
    }

    #[tokio::test]
    async fn test_store_receives_documents() {
        let temp_dir = TempDir::new().unwrap();
        let store = Arc::new(MemoryStore::default());
        let pipeline = pipeline(MemorySource::all(), &temp_dir).with_store(
            StoreAdapter::Connected(Arc::clone(&store) as Arc<dyn DocumentStore>),
        );

        let report = pipeline.run_for(date()).await;

        assert_eq!(
            report.outcome(EntityKind::Stocks).unwrap().mirror,
            MirrorStatus::Stored { documents: 2 }
        );
        let inserted = store.inserted.lock().unwrap();
        let collections: Vec<_> = inserted.iter().map(|(c, _)| c.as_str()).collect();
        assert_eq!(collections, ["market_status", "indices", "stocks", "bonds"]);
        assert_eq!(inserted[0].1[0]["date"], "2026-10-19");
    }

    #[tokio::test]
    async fn test_store_failure_is_swallowed() {
        let temp_dir = TempDir::new().unwrap();
        let pipeline = pipeline(MemorySource::all(), &temp_dir)
            .with_store(StoreAdapter::connected(DownStore));

        let report = pipeline.run_for(date()).await;

        assert_eq!(report.written_count(), 4);
        let indices = report.outcome(EntityKind::Indices).unwrap();
        assert!(indices.error.is_none());
        assert!(matches!(indices.mirror, MirrorStatus::Failed { .. }));
        assert!(indices.processed_path.as_ref().unwrap().exists());
    }

    #[tokio::test]
    async fn test_raw_write_failure_keeps_tables() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("raw"), "not a directory").unwrap();
        let pipeline = pipeline(MemorySource::all(), &temp_dir);

        let report = pipeline.run_for(date()).await;

        assert_eq!(report.failed_count(), 4);
        let status = report.outcome(EntityKind::MarketStatus).unwrap();
        assert_eq!(status.status, EntityStatus::WriteFailed);
        assert_eq!(status.raw_path, None);
        assert_eq!(status.processed_path, None);
        assert!(status.error.is_some());

        for kind in [EntityKind::Indices, EntityKind::Stocks, EntityKind::Bonds] {
            let outcome = report.outcome(kind).unwrap();
            assert_eq!(outcome.status, EntityStatus::WriteFailed);
            assert_eq!(outcome.raw_path, None);
            assert!(outcome.processed_path.as_ref().unwrap().is_file());
        }
    }

    #[tokio::test]
    async fn test_table_write_failure_spares_other_entities() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("processed"), "not a directory").unwrap();
        let pipeline = pipeline(MemorySource::all(), &temp_dir);

        let report = pipeline.run_for(date()).await;

        let status = report.outcome(EntityKind::MarketStatus).unwrap();
        assert_eq!(status.status, EntityStatus::Written);
        assert!(status.raw_path.as_ref().unwrap().is_file());

        for kind in [EntityKind::Indices, EntityKind::Stocks, EntityKind::Bonds] {
            let outcome = report.outcome(kind).unwrap();
            assert_eq!(outcome.status, EntityStatus::WriteFailed);
            assert!(outcome.raw_path.as_ref().unwrap().is_file());
            assert_eq!(outcome.processed_path, None);
        }
        assert!(report.completed_at.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_runs_are_serialized() {
        let temp_dir = TempDir::new().unwrap();
        let source = MemorySource {
            delay: Some(Duration::from_secs(1)),
            ..MemorySource::all()
        };
        let pipeline = pipeline(source, &temp_dir);

        let (first, second) = tokio::join!(pipeline.run_for(date()), pipeline.run_for(date()));

        assert_eq!(pipeline.source.max_in_flight.load(Ordering::SeqCst), 1);
        assert_eq!(first.written_count(), 4);
        assert_eq!(second.written_count(), 4);
    }

    #[test]
    fn test_news_parses_to_nothing() {
        let data = parse_page(EntityKind::News, "", &PageLayout::default(), date()).unwrap();
        assert!(data.is_empty());
    }
}

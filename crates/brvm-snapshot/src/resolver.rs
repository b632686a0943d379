//! Snapshot resolver.

use crate::{Result, SnapshotError, SnapshotLayout};
use brvm_types::{BondQuote, EntityKind, IndexRow, MarketStatus, StockQuote};
use chrono::NaiveDate;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{Span, debug, trace};

/// Contents of a resolved snapshot.
///
/// Serializes as the bare document or list, without a tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Snapshot {
    /// Market status document.
    MarketStatus(MarketStatus),
    /// Flattened index rows.
    Indices(Vec<IndexRow>),
    /// Equities price list.
    Stocks(Vec<StockQuote>),
    /// Bonds price list.
    Bonds(Vec<BondQuote>),
    /// News document, served exactly as stored.
    News(Value),
}

impl Snapshot {
    /// Returns the value served when no snapshot exists for `kind`.
    ///
    /// An empty list, or an unknown market status with an empty `last_update`.
    #[must_use]
    pub fn empty(kind: EntityKind) -> Self {
        match kind {
            EntityKind::MarketStatus => Self::MarketStatus(MarketStatus::unknown()),
            EntityKind::Indices => Self::Indices(Vec::new()),
            EntityKind::Stocks => Self::Stocks(Vec::new()),
            EntityKind::Bonds => Self::Bonds(Vec::new()),
            EntityKind::News => Self::News(Value::Array(Vec::new())),
        }
    }

    /// Returns the entity kind of this snapshot.
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        match self {
            Self::MarketStatus(_) => EntityKind::MarketStatus,
            Self::Indices(_) => EntityKind::Indices,
            Self::Stocks(_) => EntityKind::Stocks,
            Self::Bonds(_) => EntityKind::Bonds,
            Self::News(_) => EntityKind::News,
        }
    }

    /// Returns the number of records (1 for market status and non-list news).
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::MarketStatus(_) => 1,
            Self::Indices(rows) => rows.len(),
            Self::Stocks(quotes) => quotes.len(),
            Self::Bonds(quotes) => quotes.len(),
            Self::News(Value::Array(items)) => items.len(),
            Self::News(Value::Null) => 0,
            Self::News(_) => 1,
        }
    }

    /// Returns true if the snapshot holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Outcome of a resolution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolved {
    /// Requested entity.
    pub kind: EntityKind,
    /// File the snapshot was read from, or `None` when nothing was found.
    pub source: Option<PathBuf>,
    /// Snapshot contents.
    pub snapshot: Snapshot,
}

/// Finds the freshest known snapshot of an entity.
///
/// For a requested date, the exact dated file wins. Otherwise the file with
/// the lexicographically greatest name is used, which is the latest date
/// since names embed `YYYY-MM-DD`. Absence of any file is not an error.
#[derive(Debug, Clone)]
pub struct SnapshotResolver {
    layout: SnapshotLayout,
    span: Span,
}

impl SnapshotResolver {
    /// Creates a resolver over the given layout.
    #[must_use]
    pub fn new(layout: SnapshotLayout) -> Self {
        Self {
            layout,
            span: Span::none(),
        }
    }

    /// Sets the logging context.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Returns the layout.
    #[must_use]
    pub const fn layout(&self) -> &SnapshotLayout {
        &self.layout
    }

    /// Returns the snapshot file that would be served for `(kind, date)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot directory exists but cannot be listed.
    pub fn locate(&self, kind: EntityKind, date: NaiveDate) -> Result<Option<PathBuf>> {
        let _guard = self.span.enter();
        let format = SnapshotLayout::source_format(kind);

        let exact = self.layout.path_for(kind, date, format);
        if exact.is_file() {
            trace!(entity = %kind, path = %exact.display(), "exact snapshot");
            return Ok(Some(exact));
        }

        let dir = self.layout.dir_for(format);
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(SnapshotError::ReadDir {
                    path: dir.to_path_buf(),
                    source: e,
                });
            }
        };

        let mut latest: Option<String> = None;
        for entry in entries {
            let entry = entry.map_err(|e| SnapshotError::ReadDir {
                path: dir.to_path_buf(),
                source: e,
            })?;
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            if SnapshotLayout::date_of(&name, kind, format).is_none() {
                continue;
            }
            if latest.as_ref().is_none_or(|best| name > *best) {
                latest = Some(name);
            }
        }

        let found = latest.map(|name| dir.join(name));
        debug!(entity = %kind, %date, fallback = ?found, "no exact snapshot");
        Ok(found)
    }

    /// Resolves the snapshot of `kind` for `date`.
    ///
    /// # Errors
    ///
    /// Returns an error if the chosen file cannot be read or parsed.
    pub fn resolve(&self, kind: EntityKind, date: NaiveDate) -> Result<Resolved> {
        let Some(path) = self.locate(kind, date)? else {
            return Ok(Resolved {
                kind,
                source: None,
                snapshot: Snapshot::empty(kind),
            });
        };

        let snapshot = match kind {
            EntityKind::MarketStatus => Snapshot::MarketStatus(read_json(&path)?),
            EntityKind::News => Snapshot::News(read_json(&path)?),
            EntityKind::Indices => Snapshot::Indices(read_csv(&path)?),
            EntityKind::Stocks => Snapshot::Stocks(read_csv(&path)?),
            EntityKind::Bonds => Snapshot::Bonds(read_csv(&path)?),
        };

        Ok(Resolved {
            kind,
            source: Some(path),
            snapshot,
        })
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path).map_err(|e| SnapshotError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| SnapshotError::ParseJson {
        path: path.to_path_buf(),
        source: e,
    })
}

fn read_csv<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let parse_err = |source| SnapshotError::ParseCsv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = csv::Reader::from_path(path).map_err(parse_err)?;
    reader
        .deserialize()
        .collect::<std::result::Result<Vec<T>, csv::Error>>()
        .map_err(parse_err)
}

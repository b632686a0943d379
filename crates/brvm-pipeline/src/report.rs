//! Run report types.

use brvm_types::EntityKind;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

/// Unique identifier for an ingestion run.
pub type RunId = Uuid;

/// Outcome of one entity within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EntityStatus {
    /// Not processed yet.
    #[default]
    Pending,
    /// Snapshot files were written.
    Written,
    /// The page parsed to zero records; nothing was written.
    Empty,
    /// The page could not be fetched.
    FetchFailed,
    /// The page was fetched but its anchor markup was missing.
    ParseFailed,
    /// Writing a snapshot file failed.
    WriteFailed,
}

impl EntityStatus {
    /// Returns true for statuses that leave a fresh snapshot on disk.
    #[must_use]
    pub const fn is_written(&self) -> bool {
        matches!(self, Self::Written)
    }

    /// Returns true if the entity failed.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::FetchFailed | Self::ParseFailed | Self::WriteFailed)
    }

    /// Returns the status as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Written => "written",
            Self::Empty => "empty",
            Self::FetchFailed => "fetch_failed",
            Self::ParseFailed => "parse_failed",
            Self::WriteFailed => "write_failed",
        }
    }
}

impl std::fmt::Display for EntityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of mirroring one entity to the document store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum MirrorStatus {
    /// No store configured.
    #[default]
    Disabled,
    /// Nothing to mirror for this entity.
    Skipped,
    /// Documents were stored.
    Stored {
        /// Number of stored documents.
        documents: usize,
    },
    /// The store failed; the snapshot is unaffected.
    Failed {
        /// Error message.
        error: String,
    },
}

/// What happened to one entity during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityOutcome {
    /// The entity.
    pub kind: EntityKind,
    /// Snapshot outcome.
    pub status: EntityStatus,
    /// Number of parsed records.
    pub records: usize,
    /// Raw JSON snapshot written, if any.
    pub raw_path: Option<PathBuf>,
    /// Processed CSV snapshot written, if any.
    pub processed_path: Option<PathBuf>,
    /// Store mirror outcome.
    pub mirror: MirrorStatus,
    /// Error message if the entity failed.
    pub error: Option<String>,
}

impl EntityOutcome {
    /// Creates a pending outcome.
    #[must_use]
    pub const fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            status: EntityStatus::Pending,
            records: 0,
            raw_path: None,
            processed_path: None,
            mirror: MirrorStatus::Skipped,
            error: None,
        }
    }

    /// Marks the entity failed with the given status and error.
    pub fn fail(&mut self, status: EntityStatus, error: impl std::fmt::Display) {
        self.status = status;
        self.error = Some(error.to_string());
    }
}

/// Report of one ingestion run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// Unique identifier for this run.
    pub run_id: RunId,
    /// Snapshot date of the run.
    pub date: NaiveDate,
    /// Timestamp when the run started.
    pub started_at: DateTime<Utc>,
    /// Timestamp when the run completed.
    pub completed_at: Option<DateTime<Utc>>,
    /// One outcome per ingested entity, in processing order.
    pub entities: Vec<EntityOutcome>,
}

impl RunReport {
    /// Starts a report for a run on `date`.
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            date,
            started_at: Utc::now(),
            completed_at: None,
            entities: Vec::new(),
        }
    }

    /// Marks the run as completed.
    pub fn mark_completed(&mut self) {
        self.completed_at = Some(Utc::now());
    }

    /// Returns the outcome of the given entity.
    #[must_use]
    pub fn outcome(&self, kind: EntityKind) -> Option<&EntityOutcome> {
        self.entities.iter().find(|o| o.kind == kind)
    }

    /// Returns a mutable reference to the outcome of the given entity.
    pub fn outcome_mut(&mut self, kind: EntityKind) -> Option<&mut EntityOutcome> {
        self.entities.iter_mut().find(|o| o.kind == kind)
    }

    /// Returns the number of entities with a fresh snapshot.
    #[must_use]
    pub fn written_count(&self) -> usize {
        self.entities.iter().filter(|o| o.status.is_written()).count()
    }

    /// Returns the number of failed entities.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.entities.iter().filter(|o| o.status.is_failure()).count()
    }

    /// Returns the run duration, if completed.
    #[must_use]
    pub fn duration(&self) -> Option<chrono::Duration> {
        self.completed_at.map(|end| end - self.started_at)
    }
}

//! Directory layout of the snapshot store.

use crate::{Result, SnapshotError};
use brvm_format::SnapshotFormat;
use brvm_types::EntityKind;
use chrono::NaiveDate;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Locations of raw and processed snapshots under a data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotLayout {
    root: PathBuf,
    raw: PathBuf,
    processed: PathBuf,
}

impl SnapshotLayout {
    /// Creates a layout rooted at `root`. Nothing is created on disk.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            raw: root.join("raw"),
            processed: root.join("processed"),
            root,
        }
    }

    /// Returns the default data directory.
    ///
    /// Uses the `directories` crate to find the appropriate location:
    /// - Linux: `~/.local/share/brvm/`
    /// - macOS: `~/Library/Application Support/brvm/`
    /// - Windows: `C:\Users\<User>\AppData\Roaming\brvm\`
    ///
    /// Falls back to `~/.brvm/` if the platform-specific location
    /// cannot be determined.
    #[must_use]
    pub fn default_path() -> PathBuf {
        ProjectDirs::from("", "", "brvm").map_or_else(dirs_fallback, |proj_dirs| {
            proj_dirs.data_dir().to_path_buf()
        })
    }

    /// Creates a layout at the default data directory.
    #[must_use]
    pub fn with_default_path() -> Self {
        Self::new(Self::default_path())
    }

    /// Creates the raw and processed directories if they don't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be created.
    pub fn create(&self) -> Result<()> {
        for path in [&self.raw, &self.processed] {
            fs::create_dir_all(path).map_err(|e| SnapshotError::CreateDir {
                path: path.clone(),
                source: e,
            })?;
        }
        Ok(())
    }

    /// Returns the data directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the raw area.
    #[must_use]
    pub fn raw_dir(&self) -> &Path {
        &self.raw
    }

    /// Returns the processed area.
    #[must_use]
    pub fn processed_dir(&self) -> &Path {
        &self.processed
    }

    /// Returns the area holding files of the given format.
    #[must_use]
    pub fn dir_for(&self, format: SnapshotFormat) -> &Path {
        match format {
            SnapshotFormat::Json => &self.raw,
            SnapshotFormat::Csv => &self.processed,
        }
    }

    /// Returns the file name of a dated snapshot, e.g. `indices_2024-01-05.csv`.
    #[must_use]
    pub fn file_name(kind: EntityKind, date: NaiveDate, format: SnapshotFormat) -> String {
        format!("{}_{}.{}", kind.as_str(), date.format("%Y-%m-%d"), format.extension())
    }

    /// Returns the path of a dated snapshot.
    #[must_use]
    pub fn path_for(&self, kind: EntityKind, date: NaiveDate, format: SnapshotFormat) -> PathBuf {
        self.dir_for(format).join(Self::file_name(kind, date, format))
    }

    /// Returns the format readers resolve an entity from.
    ///
    /// Market status and news are served from raw documents, tabular entities
    /// from processed tables.
    #[must_use]
    pub const fn source_format(kind: EntityKind) -> SnapshotFormat {
        match kind {
            EntityKind::MarketStatus | EntityKind::News => SnapshotFormat::Json,
            EntityKind::Indices | EntityKind::Stocks | EntityKind::Bonds => SnapshotFormat::Csv,
        }
    }

    /// Extracts the date from a snapshot file name of the given entity and format.
    ///
    /// Returns `None` for names that do not follow `<entity>_<YYYY-MM-DD>.<ext>`.
    #[must_use]
    pub fn date_of(name: &str, kind: EntityKind, format: SnapshotFormat) -> Option<NaiveDate> {
        let stamp = name
            .strip_prefix(kind.as_str())?
            .strip_prefix('_')?
            .strip_suffix(format.extension())?
            .strip_suffix('.')?;
        if stamp.len() != 10 {
            return None;
        }
        NaiveDate::parse_from_str(stamp, "%Y-%m-%d").ok()
    }
}

impl Default for SnapshotLayout {
    fn default() -> Self {
        Self::with_default_path()
    }
}

/// Fallback for determining home directory.
fn dirs_fallback() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".brvm")
}

//! Init command implementation.

use super::Settings;
use anyhow::{Context, Result};

/// Create the raw and processed snapshot directories.
pub(crate) fn init(settings: &Settings) -> Result<()> {
    let layout = &settings.layout;
    layout
        .create()
        .context("Failed to create snapshot directories")?;

    println!("Raw snapshots:       {}", layout.raw_dir().display());
    println!("Processed snapshots: {}", layout.processed_dir().display());
    Ok(())
}

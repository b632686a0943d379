//! Show command implementation.

use super::{Settings, parse_date};
use anyhow::{Context, Result};
use brvm_lib::prelude::*;

/// Print the freshest snapshot of an entity as JSON.
pub(crate) fn show(settings: &Settings, entity: &str, date: Option<&str>) -> Result<()> {
    let kind: EntityKind = entity.parse()?;
    let date = parse_date(date)?;

    let resolved = SnapshotResolver::new(settings.layout.clone())
        .resolve(kind, date)
        .with_context(|| format!("Failed to resolve {kind} snapshot"))?;

    #[allow(clippy::option_if_let_else)]
    match &resolved.source {
        Some(path) => eprintln!("Source: {}", path.display()),
        None => eprintln!("No {kind} snapshot found"),
    }
    println!("{}", serde_json::to_string_pretty(&resolved.snapshot)?);
    Ok(())
}

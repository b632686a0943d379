//! Collect command implementation.

use super::{Settings, parse_date};
use crate::display::print_report;
use anyhow::Result;

/// Run one ingestion and print its report.
pub(crate) async fn collect(settings: &Settings, date: Option<&str>, json: bool) -> Result<()> {
    let date = parse_date(date)?;
    let pipeline = settings.pipeline().await?;

    let report = pipeline.run_for(date).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

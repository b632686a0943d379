//! Schedule command implementation.

use super::Settings;
use crate::display::print_summary;
use anyhow::{Result, bail};
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing::info;

/// Run an ingestion immediately, then every `interval_minutes` until Ctrl-C.
///
/// Runs that would start while a previous one is still going are skipped.
pub(crate) async fn schedule(settings: &Settings, interval_minutes: u64) -> Result<()> {
    if interval_minutes == 0 {
        bail!("Interval must be at least one minute");
    }
    let pipeline = settings.pipeline().await?;

    let mut ticker = tokio::time::interval(Duration::from_secs(interval_minutes * 60));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    info!(interval_minutes, "collection scheduled");

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let report = pipeline.run().await;
                print_summary(&report);
            }
            _ = tokio::signal::ctrl_c() => {
                info!("stopping scheduler");
                return Ok(());
            }
        }
    }
}

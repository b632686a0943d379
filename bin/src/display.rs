//! Display utilities for the brvm CLI.

use brvm_lib::prelude::*;
use brvm_lib::{EntityOutcome, MirrorStatus};

/// Print a run report, one line per entity.
pub(crate) fn print_report(report: &RunReport) {
    println!("Run: {}", report.run_id);
    println!("Date: {}", report.date);
    println!("Started: {}", report.started_at.format("%Y-%m-%d %H:%M:%S"));
    if let Some(duration) = report.duration() {
        println!("Duration: {:.1}s", duration.num_milliseconds() as f64 / 1000.0);
    }

    println!("\nEntities:");
    for outcome in &report.entities {
        println!("  {}", entity_line(outcome));
        for path in [&outcome.raw_path, &outcome.processed_path].into_iter().flatten() {
            println!("      -> {}", path.display());
        }
        if let Some(error) = &outcome.error {
            println!("      error: {error}");
        }
    }
}

/// Print a one-line summary of a run.
pub(crate) fn print_summary(report: &RunReport) {
    println!(
        "{} run {}: {} written, {} failed",
        report.date,
        report.run_id,
        report.written_count(),
        report.failed_count()
    );
}

fn entity_line(outcome: &EntityOutcome) -> String {
    let mirror = match &outcome.mirror {
        MirrorStatus::Disabled | MirrorStatus::Skipped => String::new(),
        MirrorStatus::Stored { documents } => format!(" [stored {documents}]"),
        MirrorStatus::Failed { .. } => " [store failed]".to_string(),
    };
    format!(
        "{:<14} {:<13} {:>4} record(s){mirror}",
        outcome.kind.as_str(),
        outcome.status.as_str(),
        outcome.records
    )
}

mod config;
mod diff;
mod error;
mod fetcher;
mod models;
mod parser;
mod report;
mod store;

use anyhow::Result;
use tracing::info;

use crate::config::Config;
use crate::store::SnapshotStore;

fn main() -> Result<()> {
    // Diagnostics go to stderr so stdout carries only the report.
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::default();
    let snapshots = SnapshotStore::new(&config.snapshot_path);

    let current = fetcher::fetch_listing(&config)?;

    match snapshots.load()? {
        None => {
            snapshots.replace(&current)?;
            println!(
                "First run: saved {} products as the comparison baseline.",
                current.len()
            );
            println!("Run again later to see which products are new.");
        }
        Some(previous) => {
            let delta = diff::new_records(&current, &previous);
            info!(new = delta.len(), "compared against previous snapshot");

            report::write(&config.report_path, &delta)?;
            report::print(&delta)?;

            // The fresh listing becomes the baseline even when nothing
            // was new.
            snapshots.replace(&current)?;
        }
    }

    Ok(())
}

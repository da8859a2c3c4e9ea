// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod config;
pub mod error;
pub mod fetch;
pub mod runlog;
pub mod schedule;
pub mod xmltv;

// ---- Re-exports for stable public API ----
pub use crate::config::AppConfig;
pub use crate::error::EpgError;
pub use crate::fetch::EpgClient;

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use tracing::debug;

/// What a completed conversion produced, for the operator summary.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub programmes: usize,
    pub skipped: usize,
    pub updated_until: DateTime<Utc>,
    pub output_file: PathBuf,
}

/// One full conversion: fetch the timeline, compute the "updated until"
/// marker, render the XMLTV document, write it out. Either the whole file
/// is produced or the error propagates; there is no partial output.
pub async fn run(cfg: &AppConfig) -> anyhow::Result<RunSummary> {
    let client = EpgClient::new(cfg)?;
    let records = client.fetch_schedule().await?;
    debug!(records = records.len(), "EPG timeline fetched");

    let updated_until = schedule::updated_until(&records)?;

    let (xml, programmes, skipped) = xmltv::build_document(cfg, &records)?;
    xmltv::write_document(&cfg.output_file, &xml)?;

    Ok(RunSummary {
        programmes,
        skipped,
        updated_until,
        output_file: cfg.output_file.clone(),
    })
}

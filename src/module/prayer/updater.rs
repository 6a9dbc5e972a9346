///! Month snapshot updater
///!
///! Fetch → extract → build → write, one cycle per invocation. Run
///! monthly (cron or similar) to keep the snapshot file fresh; each run
///! fully supersedes the previous file.

use std::path::Path;

use anyhow::{Result, bail};
use chrono::Local;

use super::parser::extract_rows;
use super::scraper::PageFetcher;
use super::snapshot::{build_snapshot, write_snapshot};
use super::types::MonthSnapshot;
use crate::config::ScraperConfig;

pub struct SnapshotUpdater {
    fetcher: PageFetcher,
}

impl SnapshotUpdater {
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        Ok(Self {
            fetcher: PageFetcher::new(config)?,
        })
    }

    /// Run one scrape cycle and write the snapshot to `output`.
    pub async fn update(&self, output: &Path) -> Result<MonthSnapshot> {
        let html = self.fetcher.fetch_page().await?;

        let rows = extract_rows(&html);
        tracing::info!("Found {} rows in prayer times table", rows.len());

        if rows.is_empty() {
            bail!("No prayer times rows found in page; refusing to overwrite snapshot");
        }

        let snapshot = build_snapshot(&rows, Local::now());
        write_snapshot(&snapshot, output).await?;

        Ok(snapshot)
    }
}

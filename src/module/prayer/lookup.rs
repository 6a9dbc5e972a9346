///! On-demand "today" lookup
///!
///! Resolves today's record from the live page and shapes the JSON body.
///! Every upstream failure is folded into the response value so the
///! caller always has valid JSON to emit.

use anyhow::Result;
use chrono::{DateTime, Datelike, Local};
use tracing::warn;

use super::parser::{extract_rows, to_record};
use super::scraper::PageFetcher;
use super::types::{LookupResponse, PrayerRecord, TodayTimes};
use crate::config::ScraperConfig;

pub const NOT_FOUND_MESSAGE: &str = "Prayer times not found for today";

/// First record, in extraction order, whose day matches `day`.
/// Rows that fail column mapping are skipped.
pub fn find_for_day(rows: &[Vec<String>], day: u32) -> Option<PrayerRecord> {
    rows.iter()
        .filter_map(|row| to_record(row))
        .find(|record| record.day == day)
}

/// Build the response for today's date.
pub async fn lookup_today(config: &ScraperConfig) -> LookupResponse {
    let today = Local::now();
    let result = fetch_for_day(config, today.day()).await;
    shape_response(result, &today)
}

async fn fetch_for_day(config: &ScraperConfig, day: u32) -> Result<Option<PrayerRecord>> {
    let fetcher = PageFetcher::new(config)?;
    let html = fetcher.fetch_page().await?;
    Ok(find_for_day(&extract_rows(&html), day))
}

/// Fold the scan result into a response body; failures become the error
/// variant, never a fault.
fn shape_response(result: Result<Option<PrayerRecord>>, today: &DateTime<Local>) -> LookupResponse {
    match result {
        Ok(Some(record)) => {
            LookupResponse::Found(TodayTimes::from_record(record, format_date(today)))
        }
        Ok(None) => LookupResponse::Error {
            error: NOT_FOUND_MESSAGE.to_string(),
        },
        Err(err) => {
            warn!("Lookup failed: {:#}", err);
            LookupResponse::Error {
                error: format!("{:#}", err),
            }
        }
    }
}

/// "DD MonthName YYYY", e.g. "17 June 2024"
fn format_date(now: &DateTime<Local>) -> String {
    now.format("%d %B %Y").to_string()
}

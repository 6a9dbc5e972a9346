///! Month snapshot builder and writer

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, Local};
use tokio::fs;

use super::parser::to_record;
use super::types::MonthSnapshot;

/// Build a fresh month snapshot from extracted rows.
///
/// On a duplicate day the later row overwrites the earlier one. The
/// on-demand lookup keeps the first match instead; the two paths are
/// intentionally left asymmetric.
pub fn build_snapshot(rows: &[Vec<String>], now: DateTime<Local>) -> MonthSnapshot {
    let mut prayer_times = BTreeMap::new();
    for row in rows {
        if let Some(record) = to_record(row) {
            prayer_times.insert(record.day, record);
        }
    }

    MonthSnapshot {
        month: now.format("%B").to_string(),
        year: now.year(),
        last_updated: now,
        prayer_times,
    }
}

/// Serialize the snapshot as pretty JSON and overwrite `path` with it.
pub async fn write_snapshot(snapshot: &MonthSnapshot, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot).context("Failed to serialize snapshot")?;

    fs::write(path, json)
        .await
        .context(format!("Failed to write snapshot file: {:?}", path))?;

    tracing::info!(
        "Saved {} days of prayer times to {:?}",
        snapshot.prayer_times.len(),
        path
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn rows(days: &[[&str; 8]]) -> Vec<Vec<String>> {
        days
            .iter()
            .map(|cells| cells.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    fn june_17() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 6, 17, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_build_snapshot_keys_by_day() {
        let snapshot = build_snapshot(
            &rows(&[
                ["00:10", "18:45", "21:02", "13:05", "05:02", "04:12", "03:52", "15"],
                ["00:11", "18:46", "21:03", "13:05", "05:03", "04:13", "03:53", "16"],
            ]),
            june_17(),
        );

        assert_eq!(
            snapshot.prayer_times.keys().copied().collect::<Vec<_>>(),
            vec![15, 16]
        );
        assert_eq!(snapshot.prayer_times[&16].maghrib, "18:46");
    }

    #[test]
    fn test_build_snapshot_stamps_month_year_and_clock() {
        let snapshot = build_snapshot(&[], june_17());
        assert_eq!(snapshot.month, "June");
        assert_eq!(snapshot.year, 2024);
        assert_eq!(snapshot.last_updated, june_17());
        assert!(snapshot.prayer_times.is_empty());
    }

    #[test]
    fn test_build_snapshot_last_duplicate_wins() {
        let snapshot = build_snapshot(
            &rows(&[
                ["00:10", "18:45", "21:02", "13:05", "05:02", "04:12", "03:52", "15"],
                ["00:20", "18:55", "21:12", "13:15", "05:12", "04:22", "04:02", "15"],
            ]),
            june_17(),
        );

        assert_eq!(snapshot.prayer_times.len(), 1);
        assert_eq!(snapshot.prayer_times[&15].midnight, "00:20");
    }

    #[test]
    fn test_build_snapshot_skips_unmappable_rows() {
        let snapshot = build_snapshot(
            &rows(&[
                ["a", "b", "c", "d", "e", "f", "g", "xx"],
                ["00:10", "18:45", "21:02", "13:05", "05:02", "04:12", "03:52", "15"],
            ]),
            june_17(),
        );

        assert_eq!(snapshot.prayer_times.len(), 1);
        assert!(snapshot.prayer_times.contains_key(&15));
    }
}
